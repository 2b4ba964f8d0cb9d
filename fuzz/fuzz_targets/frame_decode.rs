#![no_main]

use codec::CodecLimits;
use libfuzzer_sys::fuzz_target;
use messages::{AnyMessage, Frame};

fuzz_target!(|data: &[u8]| {
    let limits = CodecLimits::default();
    if let Ok(frame) = Frame::decode_with_limits(data, &limits) {
        // One decode/encode pass normalizes the frame; a second must not change it.
        let encoded = frame.encode().expect("decoded frame re-encodes");
        let again = Frame::decode_with_limits(&encoded, &limits)
            .and_then(|frame| frame.encode())
            .expect("normalized frame decodes");
        assert_eq!(encoded, again);
    }

    if let Some((&command_id, payload)) = data.split_first() {
        let _ = AnyMessage::decode_with_limits(command_id, payload, &limits);
    }
});
