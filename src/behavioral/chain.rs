// Chain of Responsibility: a request walks an ordered list of handlers until
// one of them accepts it.

use tracing::trace;

use crate::error::{PatternError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    kind: String,
    payload: String,
}

impl Request {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: String::new(),
        }
    }

    pub fn with_payload(mut self, payload: impl Into<String>) -> Self {
        self.payload = payload.into();
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }
}

/// Result of a request some handler accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handled {
    pub handler: String,
    pub response: String,
}

/// One link of the chain.
///
/// Handlers only ever see `&Request`, so a handler that declines cannot
/// leave a modified request behind for the next link.
pub trait Handler {
    fn name(&self) -> &str;
    fn accepts(&self, request: &Request) -> bool;
    fn process(&self, request: &Request) -> String;
}

// ============================================================================
// Concrete handlers
// ============================================================================

/// Accepts every request of a single kind.
pub struct KindHandler {
    name: String,
    kind: String,
}

impl KindHandler {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }
}

impl Handler for KindHandler {
    fn name(&self) -> &str {
        &self.name
    }

    fn accepts(&self, request: &Request) -> bool {
        request.kind() == self.kind
    }

    fn process(&self, request: &Request) -> String {
        format!("Handled {} request by {}", request.kind(), self.name)
    }
}

/// Handler assembled from a predicate and a processor.
pub struct FnHandler<P, F>
where
    P: Fn(&Request) -> bool,
    F: Fn(&Request) -> String,
{
    name: String,
    predicate: P,
    processor: F,
}

impl<P, F> FnHandler<P, F>
where
    P: Fn(&Request) -> bool,
    F: Fn(&Request) -> String,
{
    pub fn new(name: impl Into<String>, predicate: P, processor: F) -> Self {
        Self {
            name: name.into(),
            predicate,
            processor,
        }
    }
}

impl<P, F> Handler for FnHandler<P, F>
where
    P: Fn(&Request) -> bool,
    F: Fn(&Request) -> String,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn accepts(&self, request: &Request) -> bool {
        (self.predicate)(request)
    }

    fn process(&self, request: &Request) -> String {
        (self.processor)(request)
    }
}

// ============================================================================
// The chain
// ============================================================================

/// Handlers in link order. The order is fixed by the sequence of `link` calls.
#[derive(Default)]
pub struct HandlerChain {
    links: Vec<Box<dyn Handler>>,
}

impl HandlerChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `handler` as the next link after the current tail.
    pub fn link(mut self, handler: impl Handler + 'static) -> Self {
        self.links.push(Box::new(handler));
        self
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn handle(&self, request: &Request) -> Result<Handled> {
        for handler in &self.links {
            if handler.accepts(request) {
                return Ok(Handled {
                    handler: handler.name().to_string(),
                    response: handler.process(request),
                });
            }
            trace!(
                handler = handler.name(),
                kind = request.kind(),
                "forwarding request"
            );
        }

        Err(PatternError::Unhandled {
            request: request.kind().to_string(),
        })
    }

    /// Whether some link would accept `request`, without processing it.
    pub fn accepts_any(&self, request: &Request) -> bool {
        self.links.iter().any(|handler| handler.accepts(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_handler(
        name: &'static str,
        kind: &'static str,
        seen: Rc<RefCell<Vec<String>>>,
    ) -> impl Handler {
        FnHandler::new(
            name,
            move |request: &Request| {
                seen.borrow_mut().push(name.to_string());
                request.kind() == kind
            },
            move |request: &Request| format!("{} took {}", name, request.payload()),
        )
    }

    #[test]
    fn test_first_matching_handler_wins() {
        let chain = HandlerChain::new()
            .link(KindHandler::new("h1", "Type1"))
            .link(KindHandler::new("h2", "Type1"));

        let handled = chain.handle(&Request::new("Type1")).unwrap();
        assert_eq!(handled.handler, "h1");
        assert_eq!(handled.response, "Handled Type1 request by h1");
    }

    #[test]
    fn test_unhandled_request() {
        let chain = HandlerChain::new()
            .link(KindHandler::new("h1", "Type1"))
            .link(KindHandler::new("h2", "Type1"));

        let err = chain.handle(&Request::new("Type2")).unwrap_err();
        assert_eq!(
            err,
            PatternError::Unhandled {
                request: "Type2".to_string()
            }
        );
        assert!(!chain.accepts_any(&Request::new("Type2")));
    }

    #[test]
    fn test_request_reaches_last_link_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let chain = HandlerChain::new()
            .link(recording_handler("h1", "auth", seen.clone()))
            .link(recording_handler("h2", "validate", seen.clone()))
            .link(recording_handler("h3", "log", seen.clone()));

        let request = Request::new("log").with_payload("GET /");
        let handled = chain.handle(&request).unwrap();

        assert_eq!(handled.handler, "h3");
        assert_eq!(handled.response, "h3 took GET /");
        assert_eq!(*seen.borrow(), vec!["h1", "h2", "h3"]);
        assert_eq!(request, Request::new("log").with_payload("GET /"));
    }

    #[test]
    fn test_empty_chain_is_unhandled() {
        let chain = HandlerChain::new();
        assert!(chain.is_empty());
        assert!(chain.handle(&Request::new("anything")).is_err());
    }

    #[test]
    fn test_len() {
        let chain = HandlerChain::new()
            .link(KindHandler::new("a", "x"))
            .link(KindHandler::new("b", "y"));
        assert_eq!(chain.len(), 2);
    }
}
