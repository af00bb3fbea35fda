use pretty_assertions::assert_eq;
use remote::doctest::Light;
use remote::{Error, FromFn, Invoker, Join, Signal};
use std::cell::RefCell;
use std::num::NonZeroUsize;
use std::rc::Rc;
use std::sync::mpsc;

fn counter() -> (Rc<RefCell<i32>>, Invoker<impl remote::Command>) {
    let value = Rc::new(RefCell::new(0));
    let mut invoker = Invoker::new();
    for step in [1, 10, 100] {
        let (up, down) = (value.clone(), value.clone());
        invoker.register(FromFn::new(
            move || *up.borrow_mut() += step,
            move || *down.borrow_mut() -= step,
        ));
    }
    (value, invoker)
}

#[test]
fn fresh_invoker() {
    let invoker = Invoker::<FromFn<fn(), fn()>>::new();
    assert!(invoker.is_empty());
    assert!(!invoker.can_undo());
    assert!(!invoker.can_redo());
    assert_eq!(invoker.limit(), usize::MAX);
    assert_eq!(invoker.undo_slot(), None);
}

#[test]
fn undo_on_fresh_invoker() {
    let (value, mut invoker) = counter();
    assert_eq!(invoker.undo(), Err(Error::NothingToUndo));
    assert_eq!(invoker.redo(), Err(Error::NothingToRedo));
    assert_eq!(*value.borrow(), 0);
}

#[test]
fn undo_redo_round_trip() {
    let (value, mut invoker) = counter();
    invoker.execute(1).unwrap();
    let after_execute = *value.borrow();
    invoker.undo().unwrap();
    assert_eq!(*value.borrow(), 0);
    invoker.redo().unwrap();
    assert_eq!(*value.borrow(), after_execute);
    assert_eq!(invoker.undo_len(), 1);
    assert_eq!(invoker.redo_len(), 0);
}

#[test]
fn execute_clears_redo() {
    let (value, mut invoker) = counter();
    invoker.execute(0).unwrap();
    invoker.undo().unwrap();
    assert!(invoker.can_redo());
    invoker.execute(2).unwrap();
    assert!(!invoker.can_redo());
    assert_eq!(invoker.redo(), Err(Error::NothingToRedo));
    assert_eq!(*value.borrow(), 100);
}

#[test]
fn undo_is_lifo() {
    let (value, mut invoker) = counter();
    invoker.execute(0).unwrap();
    invoker.execute(1).unwrap();
    invoker.execute(2).unwrap();
    assert_eq!(*value.borrow(), 111);
    assert_eq!(invoker.undo_slot(), Some(2));
    invoker.undo().unwrap();
    assert_eq!(*value.borrow(), 11);
    assert_eq!(invoker.undo_slot(), Some(1));
    assert_eq!(invoker.redo_slot(), Some(2));
    invoker.undo().unwrap();
    assert_eq!(invoker.redo_slot(), Some(1));
    invoker.redo().unwrap();
    assert_eq!(*value.borrow(), 11);
    assert_eq!(invoker.redo_slot(), Some(2));
}

#[test]
fn repeated_slot_undoes_each_execution() {
    let light = Light::new();
    let mut invoker = Invoker::new();
    let on = invoker.register(light.switch(true));
    let off = invoker.register(light.switch(false));

    invoker.execute(off).unwrap();
    invoker.execute(on).unwrap();
    invoker.execute(off).unwrap();
    assert!(!light.is_on());

    invoker.undo().unwrap();
    assert!(light.is_on());
    invoker.undo().unwrap();
    assert!(!light.is_on());
    invoker.undo().unwrap();
    assert!(!light.is_on());

    invoker.go_to(3).unwrap();
    assert!(!light.is_on());
    invoker.go_to(1).unwrap();
    assert!(!light.is_on());
    invoker.go_to(2).unwrap();
    assert!(light.is_on());
}

#[test]
fn invalid_slot_leaves_history_unchanged() {
    let (value, mut invoker) = counter();
    invoker.execute(0).unwrap();
    invoker.execute(1).unwrap();
    invoker.undo().unwrap();
    assert_eq!(invoker.execute(3), Err(Error::InvalidSlot { slot: 3, len: 3 }));
    assert_eq!(invoker.undo_len(), 1);
    assert_eq!(invoker.redo_len(), 1);
    assert_eq!(*value.borrow(), 1);
}

#[test]
fn limit_evicts_oldest() {
    let value = Rc::new(RefCell::new(String::new()));
    let mut invoker = Invoker::builder()
        .limit(NonZeroUsize::new(2).unwrap())
        .build();
    for c in ['a', 'b', 'c'] {
        let (push, pop) = (value.clone(), value.clone());
        invoker.register(FromFn::new(
            move || value_push(&push, c),
            move || {
                pop.borrow_mut().pop();
            },
        ));
    }
    invoker.execute(0).unwrap();
    invoker.execute(1).unwrap();
    invoker.execute(2).unwrap();
    assert_eq!(*value.borrow(), "abc");
    assert_eq!(invoker.undo_len(), 2);
    invoker.undo().unwrap();
    invoker.undo().unwrap();
    assert_eq!(invoker.undo(), Err(Error::NothingToUndo));
    assert_eq!(*value.borrow(), "a");
}

fn value_push(value: &RefCell<String>, c: char) {
    value.borrow_mut().push(c);
}

#[test]
fn go_to() {
    let (value, mut invoker) = counter();
    invoker.execute(0).unwrap();
    invoker.execute(1).unwrap();
    invoker.execute(2).unwrap();

    invoker.go_to(0).unwrap();
    assert_eq!(*value.borrow(), 0);
    assert_eq!(invoker.redo_len(), 3);
    invoker.go_to(2).unwrap();
    assert_eq!(*value.borrow(), 11);
    invoker.go_to(3).unwrap();
    assert_eq!(*value.borrow(), 111);
    invoker.go_to(1).unwrap();
    assert_eq!(*value.borrow(), 1);

    assert_eq!(invoker.go_to(4), Err(Error::InvalidDepth { depth: 4, max: 3 }));
    assert_eq!(invoker.undo_len(), 1);
    assert_eq!(*value.borrow(), 1);
}

#[test]
fn clear_keeps_receiver_and_slots() {
    let (value, mut invoker) = counter();
    invoker.execute(2).unwrap();
    invoker.execute(1).unwrap();
    invoker.undo().unwrap();
    invoker.clear();
    assert!(!invoker.can_undo());
    assert!(!invoker.can_redo());
    assert_eq!(*value.borrow(), 100);
    assert_eq!(invoker.len(), 3);
}

#[test]
fn signals() {
    let (sender, receiver) = mpsc::channel();
    let mut iter = receiver.try_iter();
    let light = Light::new();
    let mut invoker = Invoker::builder().connect(sender).build();
    invoker.register(light.switch(true));
    invoker.register(light.switch(false));

    invoker.execute(0).unwrap();
    invoker.execute(1).unwrap();
    assert_eq!(iter.next(), Some(Signal::Undo(true)));
    assert_eq!(iter.next(), Some(Signal::Depth(1)));
    assert_eq!(iter.next(), Some(Signal::Depth(2)));
    assert_eq!(iter.next(), None);

    invoker.go_to(0).unwrap();
    assert_eq!(iter.next(), Some(Signal::Undo(false)));
    assert_eq!(iter.next(), Some(Signal::Redo(true)));
    assert_eq!(iter.next(), Some(Signal::Depth(0)));
    assert_eq!(iter.next(), None);

    invoker.redo().unwrap();
    assert_eq!(iter.next(), Some(Signal::Undo(true)));
    assert_eq!(iter.next(), Some(Signal::Depth(1)));
    assert_eq!(iter.next(), None);

    invoker.execute(0).unwrap();
    assert_eq!(iter.next(), Some(Signal::Redo(false)));
    assert_eq!(iter.next(), Some(Signal::Depth(2)));
    assert_eq!(iter.next(), None);

    assert_eq!(invoker.undo(), Ok(()));
    assert_eq!(invoker.undo(), Ok(()));
    assert_eq!(invoker.undo(), Err(Error::NothingToUndo));
    let signals: Vec<_> = iter.collect();
    assert_eq!(
        signals,
        [
            Signal::Redo(true),
            Signal::Depth(1),
            Signal::Undo(false),
            Signal::Depth(0),
        ],
    );
}

#[test]
fn disconnect_stops_signals() {
    let signals = Rc::new(RefCell::new(Vec::new()));
    let sink = signals.clone();
    let light = Light::new();
    let mut invoker = Invoker::builder()
        .connect(move |s: Signal| sink.borrow_mut().push(s))
        .build();
    invoker.register(light.switch(true));
    invoker.execute(0).unwrap();
    assert!(invoker.disconnect().is_some());
    invoker.undo().unwrap();
    assert_eq!(*signals.borrow(), [Signal::Undo(true), Signal::Depth(1)]);
}

#[test]
fn join_inverts_in_reverse() {
    let order = Rc::new(RefCell::new(Vec::new()));
    let step = |name: &'static str| {
        let (a, b) = (order.clone(), order.clone());
        FromFn::new(
            move || a.borrow_mut().push(format!("apply {name}")),
            move || b.borrow_mut().push(format!("invert {name}")),
        )
    };
    let mut invoker = Invoker::new();
    invoker.register(Join::new(step("a"), step("b")).join(step("c")));
    invoker.execute(0).unwrap();
    invoker.undo().unwrap();
    invoker.redo().unwrap();
    assert_eq!(
        *order.borrow(),
        [
            "apply a", "apply b", "apply c", "invert c", "invert b", "invert a", "apply a",
            "apply b", "apply c",
        ],
    );
}

#[test]
fn display_history() {
    let light = Light::new();
    let mut invoker = Invoker::new();
    invoker.register(light.switch(true));
    invoker.register(light.switch(false));
    invoker.execute(0).unwrap();
    invoker.execute(1).unwrap();
    invoker.execute(0).unwrap();
    invoker.undo().unwrap();

    let mut display = invoker.display();
    display.detailed(false);
    #[cfg(feature = "colored")]
    display.colored(false);
    assert_eq!(
        display.to_string(),
        "3 (slot 0) turn on light\n\
         2 (slot 1) [HEAD] turn off light\n\
         1 (slot 0) turn on light\n\
         0\n",
    );

    display.head(false);
    assert!(!display.to_string().contains("[HEAD]"));
}

#[test]
fn join_text() {
    let light = Light::new();
    let join = Join::new(light.switch(false), light.switch(true)).join(light.switch(false));
    assert_eq!(
        join.to_string(),
        "turn off light & turn on light & turn off light"
    );
}
