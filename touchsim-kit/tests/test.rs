use std::time::Duration;

use touchsim_kit::contact::{ContactDescriptor, TouchPhase};
use touchsim_kit::error::InjectError;
use touchsim_kit::injector::TouchSink;
use touchsim_kit::script::{self, CONTACT_ID, SWIPE_SCRIPT};

/// Records every submitted descriptor, optionally failing at one index.
#[derive(Default)]
struct RecordingSink {
    seen: Vec<ContactDescriptor>,
    fail_at: Option<usize>,
}

impl TouchSink for RecordingSink {
    fn inject(&mut self, contact: &ContactDescriptor) -> Result<(), InjectError> {
        if self.fail_at == Some(self.seen.len()) {
            return Err(InjectError::InjectionFailed {
                action: contact.phase.action(),
                code: 0x1f,
            });
        }
        self.seen.push(*contact);
        Ok(())
    }
}

#[test]
fn swipe_script_submits_in_order() {
    let mut sink = RecordingSink::default();
    script::run_script(&mut sink, &SWIPE_SCRIPT, Duration::ZERO).unwrap();

    let expected = [
        (TouchPhase::Down, 300, 300),
        (TouchPhase::Move, 400, 350),
        (TouchPhase::Move, 500, 400),
        (TouchPhase::Up, 500, 400),
    ];
    assert_eq!(sink.seen.len(), expected.len());
    for (contact, (phase, x, y)) in sink.seen.iter().zip(expected) {
        assert_eq!(contact.phase, phase);
        assert_eq!((contact.x, contact.y), (x, y));
        assert_eq!(contact.id, CONTACT_ID);
    }
}

#[test]
fn failed_step_aborts_remaining_steps() {
    // Fail the second submission (the first move).
    let mut sink = RecordingSink {
        seen: vec![],
        fail_at: Some(1),
    };
    let err = script::run_script(&mut sink, &SWIPE_SCRIPT, Duration::ZERO).unwrap_err();

    assert_eq!(sink.seen.len(), 1);
    match err {
        InjectError::InjectionFailed { action, code } => {
            assert_eq!(action, "touch move");
            assert_eq!(code, 0x1f);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn failure_on_first_step_submits_nothing_else() {
    let mut sink = RecordingSink {
        seen: vec![],
        fail_at: Some(0),
    };
    let err = script::run_script(&mut sink, &SWIPE_SCRIPT, Duration::ZERO).unwrap_err();

    assert!(sink.seen.is_empty());
    assert!(matches!(
        err,
        InjectError::InjectionFailed {
            action: "touch down",
            ..
        }
    ));
}

#[test]
fn contact_rect_is_centered_on_position() {
    let contact = ContactDescriptor::new(TouchPhase::Move, 400, 350, CONTACT_ID);
    assert_eq!(contact.contact_rect(), (398, 348, 402, 352));
}

#[test]
fn hint_only_for_permission_denied() {
    let denied = InjectError::PermissionDenied { code: 0x5 };
    assert!(denied.hint().is_some());

    assert!(InjectError::InitFailed { code: 0x57 }.hint().is_none());
    assert!(
        InjectError::InjectionFailed {
            action: "touch up",
            code: 0x5
        }
        .hint()
        .is_none()
    );
    assert!(InjectError::Unsupported.hint().is_none());
}
