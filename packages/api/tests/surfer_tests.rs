//! Public API tests for the jsurf facade

use std::cell::RefCell;
use std::rc::Rc;

use serde::Deserialize;
use serde_json::{Value, json};

use jsurf::Surfer;

#[test]
fn test_builder_and_surf_shorthands() {
    let _ = env_logger::builder().is_test(true).try_init();
    let titles = Rc::new(RefCell::new(Vec::<Value>::new()));
    let sink = Rc::clone(&titles);
    let mut builder = Surfer::builder();
    builder
        .bind_fn("$.store.book[*].title", move |value: &Value, _parsing| {
            sink.borrow_mut().push(value.clone());
            Ok(())
        })
        .expect("binding should register");
    let mut context = builder.build().expect("context should build");
    jsurf::surf(
        r#"{"store":{"book":[{"title":"A"},{"title":"B"}]}}"#,
        &mut context,
    )
    .expect("document should surf cleanly");
    assert_eq!(*titles.borrow(), vec![json!("A"), json!("B")]);
}

#[test]
fn test_typed_binding_through_the_facade() {
    #[derive(Debug, Deserialize, PartialEq)]
    struct Book {
        title: String,
    }

    let books = Rc::new(RefCell::new(Vec::<Book>::new()));
    let sink = Rc::clone(&books);
    let mut builder = jsurf::builder();
    builder
        .bind_typed("$.store.book[*]", move |book: Book, _parsing| {
            sink.borrow_mut().push(book);
            Ok(())
        })
        .expect("binding should register");
    let mut context = builder.build().expect("context should build");
    jsurf::surf(
        r#"{"store":{"book":[{"title":"A"},{"title":"B"}]}}"#,
        &mut context,
    )
    .expect("document should surf cleanly");
    assert_eq!(
        *books.borrow(),
        vec![
            Book {
                title: "A".to_string()
            },
            Book {
                title: "B".to_string()
            },
        ]
    );
}

#[test]
fn test_listener_observes_live_path() {
    let paths = Rc::new(RefCell::new(Vec::<String>::new()));
    let sink = Rc::clone(&paths);
    let mut builder = jsurf::builder();
    builder
        .bind_fn("$..id", move |_value: &Value, parsing| {
            sink.borrow_mut().push(parsing.json_path());
            Ok(())
        })
        .expect("binding should register");
    let mut context = builder.build().expect("context should build");
    jsurf::surf(r#"{"id":1,"nested":{"id":2}}"#, &mut context)
        .expect("document should surf cleanly");
    assert_eq!(
        *paths.borrow(),
        vec!["$.id".to_string(), "$.nested.id".to_string()]
    );
}
