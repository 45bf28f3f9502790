use wrapcall::{
    apply_callback, apply_direct, Callback, DispatchConfig, DispatchError, Dispatcher,
    OverflowPolicy, Wrapper,
};

use crate::init_logger;

struct Constant(i32);

impl Wrapper for Constant {
    fn method(&self) -> i32 {
        self.0
    }
}

#[test]
fn direct_ignores_param() {
    init_logger();
    assert_eq!(apply_direct(100), 2);
    assert_eq!(apply_direct(i32::MIN), 2);
}

#[test]
fn callback_returns_forty_two() {
    init_logger();
    assert_eq!(apply_callback(Some(&Constant(41))), Ok(42));
}

#[test]
fn callback_boundaries_wrap() {
    init_logger();
    let cases = [
        (i32::MIN, i32::MIN + 1),
        (-1, 0),
        (0, 1),
        (1, 2),
        (i32::MAX, i32::MIN),
    ];
    for (value, expected) in cases {
        assert_eq!(apply_callback(Some(&Constant(value))), Ok(expected));
    }
}

#[test]
fn absent_wrapper_is_invalid_argument() {
    init_logger();
    let err = apply_callback(None).unwrap_err();
    assert_eq!(err, DispatchError::InvalidArgument("wrapper"));
    assert_eq!(err.to_string(), "invalid argument: wrapper is required");
}

#[test]
fn closures_and_trait_objects_share_one_entry_point() {
    init_logger();
    let base = 10;
    let closure = move || base * 4;
    let boxed: Box<dyn Wrapper> = Box::new(Constant(-8));
    let stored: Callback<(), i32> = Callback::new(|()| 99);

    assert_eq!(apply_callback(Some(&closure)), Ok(41));
    assert_eq!(apply_callback(Some(boxed.as_ref())), Ok(-7));
    assert_eq!(apply_callback(Some(&stored)), Ok(100));
}

#[test]
fn checked_policy_propagates_with_question_mark() {
    init_logger();
    fn total(dispatcher: &Dispatcher, values: &[i32]) -> wrapcall::Result<i32> {
        let mut total = 0;
        for value in values {
            total += dispatcher.apply_fn(|| *value)?;
        }
        Ok(total)
    }

    let checked =
        Dispatcher::new(DispatchConfig::default().with_overflow(OverflowPolicy::Checked));
    assert_eq!(total(&checked, &[1, 2, 3]), Ok(9));
    assert_eq!(
        total(&checked, &[1, i32::MAX]),
        Err(DispatchError::Overflow { value: i32::MAX })
    );
}
