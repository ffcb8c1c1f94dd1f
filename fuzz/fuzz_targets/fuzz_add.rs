#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(expression) = std::str::from_utf8(data) {
        match strcalc::add(expression) {
            Ok(total) => assert!(total >= 0, "sum went negative for {expression:?}"),
            Err(err) => {
                // Only negatives may stop an evaluation
                let negatives = err.negatives().unwrap_or_default();
                assert!(!negatives.is_empty());
                assert!(negatives.iter().all(|v| *v < 0));
            }
        }
    }
});
