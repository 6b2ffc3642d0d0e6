//! Behavioral tests for `Nullable` chains.
//!
//! Covers the documented scenarios, laziness of every argument that the
//! chain may skip, and the `tracing` events emitted when a chain drops a
//! value or falls back.

use std::cell::Cell;
use std::fmt;
use std::sync::{Arc, Mutex};

use rstest::rstest;
use solum::{
    Nullable, Predicate, constant, guard, key, nil, nullable, refine, satisfies, solum,
};
use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

#[derive(Debug, Clone, PartialEq)]
struct Record {
    a: i32,
    b: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
enum Message {
    Text(String),
    Code(u16),
}

// =============================================================================
// Scenarios
// =============================================================================

#[rstest]
fn scenario_fallback_on_absent() {
    assert_eq!(nullable(None::<i32>).or(0), 0);
}

#[rstest]
fn scenario_value_wins_over_fallback() {
    assert_eq!(nullable(Some(5)).or(0), 5);
}

#[rstest]
fn scenario_failed_predicate_is_nil() {
    assert!(nullable(Some(5)).that(|n| *n > 10).is_nil());
}

#[rstest]
fn scenario_pick_field() {
    let record = Record { a: 1, b: None };
    assert_eq!(nullable(Some(record)).pick(key!(Record, a)), solum(1));
}

#[rstest]
fn scenario_bind_on_absent() {
    assert!(nullable(None::<i32>).onto(|x| solum(x + 1)).is_nil());
}

#[rstest]
fn to_some_keeps_value() {
    let value = String::from("kept");
    assert_eq!(solum(value.clone()).to(Some).value(), Some(&value));
}

#[rstest]
fn long_chain_mixes_every_operation() {
    let mut audit = Vec::new();
    let records = vec![
        Record { a: 4, b: Some(40) },
        Record { a: 3, b: Some(30) },
        Record { a: 8, b: None },
    ];

    let results: Vec<i32> = records
        .into_iter()
        .map(|record| {
            nullable(Some(record))
                .that(|record| record.a % 2 == 0)
                .pick(key!(Record, ?b))
                .run(|b| audit.push(*b))
                .which(refine::<u8>())
                .to(|b| Some(i32::from(b) + 1))
                .otherwise(|| Some(-1))
                .or(0)
        })
        .collect();

    assert_eq!(results, vec![41, -1, -1]);
    assert_eq!(audit, vec![40]);
}

#[rstest]
#[case(Message::Text(String::from("hi")), Nullable::Solum(String::from("hi")))]
#[case(Message::Code(404), Nullable::Nil)]
fn which_selects_variant(#[case] message: Message, #[case] expected: Nullable<String>) {
    assert_eq!(solum(message).which(guard!(Message, Text)), expected);
}

struct Adult;

impl Predicate<u32> for Adult {
    fn test(&self, age: &u32) -> bool {
        *age >= 18
    }
}

#[rstest]
#[case(30, solum(30))]
#[case(12, nil())]
fn that_accepts_predicate_types(#[case] age: u32, #[case] expected: Nullable<u32>) {
    assert_eq!(solum(age).that(satisfies(Adult)), expected);
}

#[rstest]
fn nil_retypes_through_the_chain() {
    let start: Nullable<Record> = nil();
    assert!(start.is_nil());
    let picked: Nullable<i32> = start.pick(key!(Record, a));
    let rendered: Nullable<String> = picked.to(|n| Some(n.to_string()));
    assert!(rendered.is_nil());
}

// =============================================================================
// Laziness
// =============================================================================

struct Spy {
    calls: Cell<usize>,
}

impl Spy {
    const fn new() -> Self {
        Self {
            calls: Cell::new(0),
        }
    }

    fn hit(&self) {
        self.calls.set(self.calls.get() + 1);
    }

    fn count(&self) -> usize {
        self.calls.get()
    }
}

#[rstest]
fn nil_skips_every_callback() {
    let spy = Spy::new();

    let result = nil::<i32>()
        .onto(|n| {
            spy.hit();
            solum(n)
        })
        .to(|n| {
            spy.hit();
            Some(n)
        })
        .that(|_| {
            spy.hit();
            true
        })
        .which(|n: i32| {
            spy.hit();
            Some(n)
        })
        .when(|| {
            spy.hit();
            true
        })
        .run(|_| spy.hit());

    assert!(result.is_nil());
    assert_eq!(spy.count(), 0);
}

#[rstest]
fn fallbacks_run_exactly_once_on_nil() {
    let spy = Spy::new();

    let recovered = nil::<i32>().otherwise(|| {
        spy.hit();
        Some(1)
    });
    assert_eq!(recovered, solum(1));
    assert_eq!(spy.count(), 1);

    let value = nil::<i32>().or(|| {
        spy.hit();
        2
    });
    assert_eq!(value, 2);
    assert_eq!(spy.count(), 2);
}

#[rstest]
fn fallbacks_never_run_on_solum() {
    let spy = Spy::new();

    let kept = solum(9)
        .otherwise(|| {
            spy.hit();
            Some(1)
        })
        .or(|| {
            spy.hit();
            2
        });

    assert_eq!(kept, 9);
    assert_eq!(spy.count(), 0);
}

#[rstest]
fn constant_serves_as_fallback() {
    let zero = constant(0);
    assert_eq!(nil::<i32>().or(&zero), 0);
    assert_eq!(nil::<i32>().otherwise(Some(zero())), solum(0));
}

#[rstest]
#[should_panic(expected = "producer failed")]
fn panicking_producer_panics_at_evaluation() {
    let _ = nil::<i32>().or(|| -> i32 { panic!("producer failed") });
}

#[rstest]
fn panicking_producer_is_harmless_on_solum() {
    assert_eq!(solum(1).or(|| -> i32 { panic!("never evaluated") }), 1);
}

#[rstest]
#[should_panic(expected = "fallback failed")]
fn panicking_fallback_panics_at_evaluation() {
    let _ = nil::<i32>().otherwise(|| -> Option<i32> { panic!("fallback failed") });
}

#[rstest]
fn panicking_fallback_is_harmless_on_solum() {
    let kept = solum(1).otherwise(|| -> Option<i32> { panic!("never evaluated") });
    assert_eq!(kept, solum(1));
}

#[rstest]
#[should_panic(expected = "proposition failed")]
fn panicking_proposition_panics_at_evaluation() {
    let _ = solum(1).when(|| -> bool { panic!("proposition failed") });
}

#[rstest]
fn panicking_proposition_is_harmless_on_nil() {
    let skipped = nil::<i32>().when(|| -> bool { panic!("never evaluated") });
    assert!(skipped.is_nil());
}

// =============================================================================
// Tracing
// =============================================================================

#[derive(Default)]
struct OperationVisitor {
    operation: Option<String>,
    payload: Option<String>,
}

impl Visit for OperationVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "operation" => self.operation = Some(value.to_owned()),
            "payload" => self.payload = Some(value.to_owned()),
            _ => {}
        }
    }

    fn record_debug(&mut self, _field: &Field, _value: &dyn fmt::Debug) {}
}

#[derive(Clone, Default)]
struct Recorder {
    events: Arc<Mutex<Vec<(String, String)>>>,
}

impl Recorder {
    fn operations(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(|(operation, _)| operation.clone())
            .collect()
    }
}

impl<S: tracing::Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &tracing::Event<'_>, _context: Context<'_, S>) {
        let mut visitor = OperationVisitor::default();
        event.record(&mut visitor);
        if let (Some(operation), Some(payload)) = (visitor.operation, visitor.payload) {
            self.events.lock().unwrap().push((operation, payload));
        }
    }
}

fn recorded<F: FnOnce()>(body: F) -> Recorder {
    let recorder = Recorder::default();
    let subscriber = tracing_subscriber::registry().with(recorder.clone());
    tracing::subscriber::with_default(subscriber, body);
    recorder
}

#[rstest]
fn dropping_a_value_is_traced() {
    let recorder = recorded(|| {
        let _ = solum(1).that(|n| *n > 5);
        let _ = solum(Message::Code(1)).which(guard!(Message, Text));
        let _ = solum(1).when(false);
    });
    assert_eq!(recorder.operations(), vec!["that", "which", "when"]);
}

#[rstest]
fn fallbacks_are_traced_with_payload_type() {
    let recorder = recorded(|| {
        let _ = nil::<u64>().otherwise(None);
        let _ = nil::<u64>().or(3);
    });
    let events = recorder.events.lock().unwrap().clone();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].0, "otherwise");
    assert_eq!(events[1].0, "or");
    assert!(events.iter().all(|(_, payload)| payload == "u64"));
}

#[rstest]
fn kept_values_are_not_traced() {
    let recorder = recorded(|| {
        let _ = solum(10).that(|n| *n > 5).when(true).otherwise(Some(1)).or(0);
        let _ = nil::<i32>().that(|_| false);
    });
    assert!(recorder.operations().is_empty());
}
