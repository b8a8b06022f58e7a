#![no_main]

use libfuzzer_sys::fuzz_target;
use lunar_core::LuaString;
use lunar_core::range::StrRange;
use lunar_core::strings::{BYTE_PLACEHOLDER, str_byte, str_sub};
use lunar_stdlib::{StringLib, Value};

fn read_i64(bytes: &[u8]) -> Option<i64> {
    let chunk: [u8; 8] = bytes.get(..8)?.try_into().ok()?;
    Some(i64::from_le_bytes(chunk))
}

fuzz_target!(|data: &[u8]| {
    // Layout: 8 bytes start, 8 bytes end, the rest is the subject string.
    let (Some(start), Some(end)) = (read_i64(data), data.get(8..).and_then(read_i64)) else {
        return;
    };
    let text = String::from_utf8_lossy(data.get(16..).unwrap_or_default());
    let s = LuaString::from(text.as_ref());

    if let Some(range) = StrRange::normalize(Some(start), Some(end), s.len()) {
        assert!(range.start < range.end && range.end <= s.len());
        assert_eq!(str_sub(&s, Some(start), Some(end)).len(), range.len());
    } else {
        assert!(str_sub(&s, Some(start), Some(end)).is_empty());
    }
    let _ = str_byte(&s, Some(start), Some(end), BYTE_PLACEHOLDER);

    // Positions arrive as floats from scripts; the dispatch layer must never panic on them.
    let lib = StringLib::new();
    let args = [Value::String(s), Value::Number(start as f64), Value::Number(end as f64)];
    let _ = lib.call("sub", &args);
    let _ = lib.call("byte", &args);
    let _ = lib.call("find", &[args[0].clone(), Value::from(""), args[1].clone()]);
});
