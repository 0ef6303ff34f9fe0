use crate::tests::SharedBuffer;
use crate::{Notifier, Toast, ToastKind, Toaster};

use tag_config::ToastConfig;

fn toaster(config: &ToastConfig) -> (Toaster, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let toaster = Toaster::with_writer(config, Box::new(buffer.clone())).unwrap();
    (toaster, buffer)
}

#[test]
fn given_success_when_notified_then_toast_written_and_recorded() {
    let (toaster, buffer) = toaster(&ToastConfig::default());

    toaster.success("Tag has been created");

    let output = buffer.contents();
    assert!(output.contains("✓ Tag has been created"));
    assert!(output.ends_with('\n'));
    assert_eq!(
        toaster.history(),
        [Toast {
            kind: ToastKind::Success,
            message: "Tag has been created".to_string(),
        }]
    );
}

#[test]
fn given_plain_colors_when_notified_then_message_still_written() {
    let config = ToastConfig {
        rich_colors: false,
        ..ToastConfig::default()
    };
    let (toaster, buffer) = toaster(&config);

    toaster.success("Saved");

    assert!(buffer.contents().contains("Saved"));
}

#[test]
fn given_several_toasts_when_history_then_in_order() {
    let (toaster, _buffer) = toaster(&ToastConfig::default());

    toaster.success("first");
    toaster.success("second");

    let messages: Vec<String> = toaster.history().into_iter().map(|t| t.message).collect();
    assert_eq!(messages, ["first", "second"]);
}

#[test]
fn given_invalid_color_when_building_toaster_then_error() {
    let config = ToastConfig {
        border: "teal".to_string(),
        ..ToastConfig::default()
    };

    let result = Toaster::with_writer(&config, Box::new(SharedBuffer::default()));

    assert!(result.is_err());
}
