#![no_main]

use bytestream::{ByteReader, PrefixWidth};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut reader = ByteReader::new(data);
    let mut idx = 0usize;

    // Use input bytes to drive a bounded sequence of operations.
    while idx < data.len() && idx < 1024 {
        let op = data[idx] % 8;
        idx += 1;

        let before = reader.position();
        let failed = match op {
            0 => reader.read_u8().is_err(),
            1 => reader.read_u16().is_err(),
            2 => reader.read_u32().is_err(),
            3 => reader.read_f64().is_err(),
            4 => reader.read_bool().is_err(),
            5 => reader.read_fixed::<16>().is_err(),
            6 => reader.read_prefixed(PrefixWidth::U8).is_err(),
            _ => reader.read_prefixed(PrefixWidth::U16).is_err(),
        };
        if failed {
            assert_eq!(reader.position(), before, "failed read moved the cursor");
        }
    }
});
