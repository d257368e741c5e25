use crate::descriptor::{CallFlags, StateMutability};
use crate::mutability::{classify, CallClass};

#[test]
fn test_payable_flag_wins() {
    assert_eq!(classify(true, None), CallClass::Payable);
    assert_eq!(
        classify(true, Some(StateMutability::View)),
        CallClass::Payable
    );
}

#[test]
fn test_payable_mutability_without_flag() {
    assert_eq!(
        classify(false, Some(StateMutability::Payable)),
        CallClass::Payable
    );
}

#[test]
fn test_view_and_pure_are_read_only() {
    assert_eq!(
        classify(false, Some(StateMutability::View)),
        CallClass::ReadOnly
    );
    assert_eq!(
        classify(false, Some(StateMutability::Pure)),
        CallClass::ReadOnly
    );
}

#[test]
fn test_missing_mutability_defaults_to_mutating() {
    assert_eq!(classify(false, None), CallClass::Mutating);
    assert_eq!(
        classify(false, Some(StateMutability::NonPayable)),
        CallClass::Mutating
    );
}

#[test]
fn test_legacy_constant_flag() {
    let flags = CallFlags {
        payable: false,
        state_mutability: None,
        constant: true,
    };
    assert_eq!(flags.classify(), CallClass::ReadOnly);

    let explicit = CallFlags {
        payable: false,
        state_mutability: Some(StateMutability::NonPayable),
        constant: true,
    };
    assert_eq!(explicit.classify(), CallClass::Mutating);
}
