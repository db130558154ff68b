use crate::contact::ContactDescriptor;
use crate::error::InjectError;

/// Visual feedback the OS draws for injected contacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackMode {
    Default,
    Indirect,
    None,
}

/// Where built descriptors get submitted.
///
/// The Win32 facility is the only real backend; tests substitute a
/// recording sink to observe the submission sequence.
pub trait TouchSink {
    fn inject(&mut self, contact: &ContactDescriptor) -> Result<(), InjectError>;
}

#[cfg(windows)]
mod win32 {
    use windows::Win32::Foundation::ERROR_ACCESS_DENIED;
    use windows::Win32::UI::Input::Pointer;
    use windows::Win32::UI::WindowsAndMessaging;

    use super::{FeedbackMode, TouchSink};
    use crate::contact::ContactDescriptor;
    use crate::contact::TouchPhase;
    use crate::error::InjectError;

    impl FeedbackMode {
        fn to_os(self) -> Pointer::TOUCH_FEEDBACK_MODE {
            match self {
                FeedbackMode::Default => Pointer::TOUCH_FEEDBACK_DEFAULT,
                FeedbackMode::Indirect => Pointer::TOUCH_FEEDBACK_INDIRECT,
                FeedbackMode::None => Pointer::TOUCH_FEEDBACK_NONE,
            }
        }
    }

    fn pointer_flags(phase: TouchPhase) -> Pointer::POINTER_FLAGS {
        match phase {
            TouchPhase::Down => {
                Pointer::POINTER_FLAG_DOWN
                    | Pointer::POINTER_FLAG_INRANGE
                    | Pointer::POINTER_FLAG_INCONTACT
            }
            TouchPhase::Move => {
                Pointer::POINTER_FLAG_UPDATE
                    | Pointer::POINTER_FLAG_INRANGE
                    | Pointer::POINTER_FLAG_INCONTACT
            }
            TouchPhase::Up => Pointer::POINTER_FLAG_UP,
        }
    }

    fn into_touch_info(contact: &ContactDescriptor) -> Pointer::POINTER_TOUCH_INFO {
        let mut info: Pointer::POINTER_TOUCH_INFO = unsafe { std::mem::zeroed() };
        info.pointerInfo.pointerType = WindowsAndMessaging::PT_TOUCH;
        info.pointerInfo.pointerId = contact.id;
        info.pointerInfo.ptPixelLocation.x = contact.x;
        info.pointerInfo.ptPixelLocation.y = contact.y;
        info.pointerInfo.pointerFlags = pointer_flags(contact.phase);

        // Report a small contact area, no extended shape data.
        let (left, top, right, bottom) = contact.contact_rect();
        info.rcContact.left = left;
        info.rcContact.top = top;
        info.rcContact.right = right;
        info.rcContact.bottom = bottom;
        info.touchFlags = WindowsAndMessaging::TOUCH_FLAG_NONE;
        info.touchMask = WindowsAndMessaging::TOUCH_MASK_CONTACTAREA;

        info
    }

    /// Injection context backed by the Win32 touch-injection facility.
    ///
    /// The context is process-wide and lives until the process exits; the
    /// OS exposes no teardown call.
    pub struct Win32Sink {
        _private: (),
    }

    impl Win32Sink {
        /// Requests permission to submit up to `max_contacts` simultaneous
        /// contacts for the remainder of the process lifetime.
        pub fn new(max_contacts: u32, feedback: FeedbackMode) -> Result<Self, InjectError> {
            unsafe { Pointer::InitializeTouchInjection(max_contacts, feedback.to_os()) }.map_err(
                |e| {
                    let code = e.code();
                    if code == ERROR_ACCESS_DENIED.to_hresult() {
                        InjectError::PermissionDenied { code: code.0 }
                    } else {
                        InjectError::InitFailed { code: code.0 }
                    }
                },
            )?;
            Ok(Self { _private: () })
        }
    }

    impl TouchSink for Win32Sink {
        fn inject(&mut self, contact: &ContactDescriptor) -> Result<(), InjectError> {
            let info = into_touch_info(contact);
            unsafe { Pointer::InjectTouchInput(&[info]) }.map_err(|e| {
                InjectError::InjectionFailed {
                    action: contact.phase.action(),
                    code: e.code().0,
                }
            })
        }
    }
}

#[cfg(windows)]
pub use win32::Win32Sink;
