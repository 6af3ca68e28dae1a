use arena_fixtures::adapters::outbound::{init_multi_logger, init_noop_logger};
use arena_fixtures::domains::logger::DomainLogger;
use std::sync::{Arc, Mutex};

struct BridgeCapture {
    messages: Arc<Mutex<Vec<String>>>,
}

impl BridgeCapture {
    fn new() -> Self { Self { messages: Arc::new(Mutex::new(Vec::new())) } }
}

impl DomainLogger for BridgeCapture {
    fn info(&self, msg: &str) { self.messages.lock().unwrap().push(format!("INFO:{}", msg)); }
    fn warn(&self, msg: &str) { self.messages.lock().unwrap().push(format!("WARN:{}", msg)); }
    fn error(&self, msg: &str) { self.messages.lock().unwrap().push(format!("ERR:{}", msg)); }
}

#[test]
fn test_multi_logger_fans_out_in_order() {
    let first = Arc::new(BridgeCapture::new());
    let second = Arc::new(BridgeCapture::new());
    let multi = init_multi_logger(vec![
        first.clone() as Arc<dyn DomainLogger>,
        second.clone() as Arc<dyn DomainLogger>,
        init_noop_logger(),
    ]);

    multi.info("one");
    multi.warn("two");
    multi.error("three");

    for capture in [&first, &second] {
        let msgs = capture.messages.lock().unwrap();
        assert_eq!(*msgs, vec!["INFO:one", "WARN:two", "ERR:three"]);
    }
}

#[test]
fn test_noop_logger_accepts_calls() {
    let noop = init_noop_logger();
    noop.info("ignored");
    noop.warn("ignored-warn");
    noop.error("ignored-err");
}
