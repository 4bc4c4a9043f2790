//! Library integration tests.

use std::sync::{Arc, Mutex};

use vulcan::action::ParsedAction;
use vulcan::dispatch::Dispatcher;
use vulcan::generator::{
    Generator, GeneratorEnv, GeneratorOutcome, GeneratorRuntime, HandlerName,
};
use vulcan::options::ParameterBag;
use vulcan::VulcanError;

#[test]
fn error_types_are_public() {
    let err = VulcanError::UnrecognizedAction {
        input: "deploy".into(),
    };
    assert!(err.to_string().contains("deploy"));
    assert!(err.is_usage_error());
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> vulcan::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use vulcan::cli::Cli;

    let cli = Cli::parse_from(["vulcan", "--dry-run", "create", "myApp"]);
    assert!(cli.dry_run);
    assert_eq!(cli.action, vec!["create", "myApp"]);
}

/// Generator that records the options it was run with.
#[derive(Default)]
struct Recorder {
    calls: Mutex<Vec<(HandlerName, ParameterBag)>>,
}

impl Generator for Recorder {
    fn run(&self, name: HandlerName, options: &ParameterBag) -> vulcan::Result<GeneratorOutcome> {
        self.calls
            .lock()
            .map_err(|e| anyhow::anyhow!("poisoned: {e}"))?
            .push((name, options.clone()));
        Ok(GeneratorOutcome::success())
    }

    fn describe(&self) -> String {
        "recorder".to_string()
    }
}

#[test]
fn dispatch_with_custom_source_runs_generator() {
    let recorder = Arc::new(Recorder::default());
    let shared = Arc::clone(&recorder);
    let source = move |_: HandlerName| -> vulcan::Result<Arc<dyn Generator>> {
        Ok(shared.clone() as Arc<dyn Generator>)
    };

    let mut dispatcher = Dispatcher::new(source, GeneratorEnv::new());
    let action = ParsedAction::resolve(&["generate", "component", "blog", "PostList"]).unwrap();
    let mut flags = ParameterBag::new();
    flags.set("style", "less");

    let outcome = dispatcher.dispatch(&action, &flags).unwrap();
    assert!(outcome.success);

    let calls = recorder.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let (name, options) = &calls[0];
    assert_eq!(*name, HandlerName::Component);
    assert_eq!(options.get("packageName"), Some("blog"));
    assert_eq!(options.get("componentName"), Some("PostList"));
    assert_eq!(options.get("style"), Some("less"));
    assert!(dispatcher.runtime().registry().contains(HandlerName::Component));
}

#[test]
fn runtime_rejects_unregistered_generator() {
    let mut env = GeneratorEnv::new();
    let err = env.run(HandlerName::List, &ParameterBag::new()).unwrap_err();
    assert!(matches!(err, VulcanError::UnregisteredGenerator { .. }));
}
