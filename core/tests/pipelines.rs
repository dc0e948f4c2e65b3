use std::any::Any;
use std::cell::Cell;
use std::panic;

use test_log::test;

use opt::Option::{self, None, Some};
use opt::{OptionError, Variant};

fn panic_message(payload: Box<dyn Any + Send>) -> String {
  match payload.downcast::<String>() {
    Ok(message) => *message,
    Err(payload) => payload.downcast_ref::<&str>().map(|s| s.to_string()).unwrap_or_default(),
  }
}

fn double_if_large(option: Option<i32>) -> i32 {
  option.filter(|x| *x > 3).map(|x| x * 2).unwrap_or(0)
}

#[test]
fn filter_map_unwrap_or() {
  assert_eq!(double_if_large(Some(5)), 10);
  assert_eq!(double_if_large(Some(2)), 0);
  assert_eq!(double_if_large(None), 0);
}

#[test]
fn parse_and_chain() {
  let parse = |s: &str| -> Option<i32> { s.parse::<i32>().ok().into() };
  let half = |x: i32| if x % 2 == 0 { Some(x / 2) } else { None };

  assert_eq!(parse("8").and_then(half).and_then(half), Some(2));
  assert_eq!(parse("6").and_then(half).and_then(half), None);
  assert_eq!(parse("eight").and_then(half), None);
}

#[test]
fn fallback_chain_stops_at_first_present() {
  let calls = Cell::new(0);
  let counter = &calls;
  let lookup = |value: Option<&'static str>| {
    move || {
      counter.set(counter.get() + 1);
      value
    }
  };

  let found = None
    .or_else(lookup(None))
    .or_else(lookup(Some("second")))
    .or_else(lookup(Some("third")));
  assert_eq!(found, Some("second"));
  assert_eq!(calls.get(), 2);
}

#[test]
fn polymorphic_use_without_knowing_variant() {
  let options: Vec<Option<&str>> = vec![Some("a"), None, Option::default(), Some("b")];
  let described: Vec<String> = options
    .into_iter()
    .map(|option| option.map_or_else(|| "-".to_string(), |s| s.to_uppercase()))
    .collect();
  assert_eq!(described, ["A", "-", "-", "B"]);
}

#[test]
fn nested_options_flatten_once() {
  let nested: Option<Option<Option<&str>>> = Some(Some(Some("x")));
  assert_eq!(nested.flatten().flatten().unwrap(), "x");
  assert_eq!(Some(Some("x")).flatten().unwrap(), "x");
  assert!(Option::<Option<i32>>::None.flatten().is_none());
}

#[test]
fn construction_guards() {
  assert_eq!(Option::try_from_parts("Some", vec!["x"]), Ok(Some("x")));
  assert_eq!(Option::<&str>::try_from_parts("None", vec![]), Ok(None));
  assert_eq!(
    Option::try_from_parts("Option", vec![""]),
    Err(OptionError::IllegalInstantiation { tag: "Option".to_string() })
  );
  assert_eq!(
    Option::try_from_parts("None", vec!["x"]),
    Err(OptionError::InvalidConstruction { variant: Variant::None, expected: 0, count: 1 })
  );
}

#[test]
fn unwrap_failure_is_a_panic_with_message() {
  let result = panic::catch_unwind(|| Option::<i32>::None.unwrap());
  let payload = result.expect_err("unwrap on None must panic");
  assert_eq!(panic_message(payload), "tried to unwrap on None");
}

#[test]
fn closure_panics_propagate_unchanged() {
  let result = panic::catch_unwind(|| Some(1).map(|_: i32| -> i32 { panic!("boom") }));
  let payload = result.expect_err("closure panic must propagate");
  assert_eq!(panic_message(payload), "boom");
}

#[test]
fn shared_across_threads() {
  let option = std::sync::Arc::new(Some(String::from("shared")));
  let handles: Vec<_> = (0..4)
    .map(|_| {
      let option = option.clone();
      std::thread::spawn(move || (*option).as_ref().map(|s| s.len()).unwrap_or(0))
    })
    .collect();
  for handle in handles {
    assert_eq!(handle.join().unwrap(), 6);
  }
}
