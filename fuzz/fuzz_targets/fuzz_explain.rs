#![no_main]

use libfuzzer_sys::fuzz_target;
use strcalc::CalcParams;

// Stage-based and direct execution must agree
fuzz_target!(|data: &[u8]| {
    if let Ok(expression) = std::str::from_utf8(data) {
        let direct = strcalc::add(expression).ok();
        let staged = strcalc::explain(expression, CalcParams::default())
            .ok()
            .and_then(|context| context.total());
        assert_eq!(direct, staged);
    }
});
