//! Builder freeze and error-strategy behavior

use std::cell::RefCell;
use std::rc::Rc;

use serde::Deserialize;
use serde_json::Value;

use jsurf_core::{
    ErrorKind, ErrorStrategy, JsonLexer, LenientStrategy, Recovery, SurfError, SurferBuilder,
};

#[test]
fn test_builder_rejects_mutation_after_build() {
    let mut builder = SurferBuilder::new();
    builder
        .bind_fn("$.a", |_value: &Value, _parsing| Ok(()))
        .expect("binding should register");
    let _context = builder.build().expect("first build should succeed");

    let late_bind = builder
        .bind_fn("$.b", |_value: &Value, _parsing| Ok(()))
        .err()
        .expect("bind after build must fail");
    assert_eq!(late_bind.kind, ErrorKind::BuilderFrozen);
    let late_option = builder
        .skip_overlapped_path()
        .err()
        .expect("option after build must fail");
    assert_eq!(late_option.kind, ErrorKind::BuilderFrozen);
    let second_build = builder
        .build()
        .err()
        .expect("second build must fail");
    assert_eq!(second_build.kind, ErrorKind::BuilderFrozen);
}

#[test]
fn test_default_strategy_surfaces_listener_failure() {
    let mut builder = SurferBuilder::new();
    builder
        .bind_fn("$.a", |_value: &Value, _parsing| Err("boom".into()))
        .expect("binding should register");
    let mut context = builder.build().expect("context should build");
    let error = JsonLexer::new(r#"{"a":1}"#)
        .surf(&mut context)
        .expect_err("strict strategy re-raises listener failures");
    assert_eq!(error.kind, ErrorKind::ListenerFailure);
    assert!(error.to_string().contains("boom"));
}

#[test]
fn test_lenient_strategy_keeps_surfing() {
    let seen = Rc::new(RefCell::new(Vec::<Value>::new()));
    let sink = Rc::clone(&seen);
    let mut builder = SurferBuilder::new();
    builder
        .bind_fn("$[*]", move |value: &Value, _parsing| {
            sink.borrow_mut().push(value.clone());
            if *value == Value::from(1) {
                Err("first element rejected".into())
            } else {
                Ok(())
            }
        })
        .expect("binding should register")
        .with_error_strategy(LenientStrategy)
        .expect("strategy should install");
    let mut context = builder.build().expect("context should build");
    JsonLexer::new("[1,2,3]")
        .surf(&mut context)
        .expect("lenient strategy swallows the failure");
    assert_eq!(
        *seen.borrow(),
        vec![Value::from(1), Value::from(2), Value::from(3)]
    );
}

#[test]
fn test_stop_recovery_latches_the_stop_flag() {
    struct StopOnFailure;
    impl ErrorStrategy for StopOnFailure {
        fn recover(&self, _error: &SurfError) -> Recovery {
            Recovery::Stop
        }
    }

    let seen = Rc::new(RefCell::new(Vec::<Value>::new()));
    let sink = Rc::clone(&seen);
    let mut builder = SurferBuilder::new();
    builder
        .bind_fn("$[*]", move |value: &Value, _parsing| {
            sink.borrow_mut().push(value.clone());
            if *value == Value::from(2) {
                Err("enough".into())
            } else {
                Ok(())
            }
        })
        .expect("binding should register")
        .with_error_strategy(StopOnFailure)
        .expect("strategy should install");
    let mut context = builder.build().expect("context should build");
    JsonLexer::new("[1,2,3,4]")
        .surf(&mut context)
        .expect("stop recovery is not an error");
    assert!(context.is_stopped());
    assert_eq!(*seen.borrow(), vec![Value::from(1), Value::from(2)]);
}

#[test]
fn test_typed_binding_casts_assembled_value() {
    #[derive(Debug, Deserialize, PartialEq)]
    struct Book {
        title: String,
        pages: u32,
    }

    let seen = Rc::new(RefCell::new(Vec::<Book>::new()));
    let sink = Rc::clone(&seen);
    let mut builder = SurferBuilder::new();
    builder
        .bind_typed("$.book", move |book: Book, _parsing| {
            sink.borrow_mut().push(book);
            Ok(())
        })
        .expect("binding should register");
    let mut context = builder.build().expect("context should build");
    JsonLexer::new(r#"{"book":{"title":"Sayings","pages":320}}"#)
        .surf(&mut context)
        .expect("document should surf cleanly");
    assert_eq!(
        *seen.borrow(),
        vec![Book {
            title: "Sayings".to_string(),
            pages: 320,
        }]
    );
}

#[test]
fn test_cast_failure_is_a_provider_failure() {
    #[derive(Debug, Deserialize)]
    struct Book {
        #[allow(dead_code)]
        pages: u32,
    }

    let mut builder = SurferBuilder::new();
    builder
        .bind_typed("$.book", |_book: Book, _parsing| Ok(()))
        .expect("binding should register");
    let mut context = builder.build().expect("context should build");
    let error = JsonLexer::new(r#"{"book":{"pages":"many"}}"#)
        .surf(&mut context)
        .expect_err("cast failure surfaces through the strict strategy");
    assert_eq!(error.kind, ErrorKind::ProviderFailure);
}

#[test]
fn test_invalid_binding_path_reports_position() {
    let mut builder = SurferBuilder::new();
    let error = builder
        .bind_fn("$.a.", |_value: &Value, _parsing| Ok(()))
        .err()
        .expect("trailing dot is malformed");
    assert_eq!(error.kind, ErrorKind::InvalidPath);
    assert!(error.to_string().contains("position"));
}
