use anyhow::Result;
use encodecraft_codec::run_self_test;

use crate::printing::print_check;

pub fn run_selftest() -> Result<()> {
    println!("🔍 Running codec self-test");

    let report = run_self_test();
    for check in &report.checks {
        print_check(check);
    }

    let total = report.checks.len();
    let failed = report.failures().count();

    println!("\n{}", "=".repeat(50));
    if failed == 0 {
        println!("✓ Self-test complete: {total} checks passed");
        Ok(())
    } else {
        anyhow::bail!("Self-test failed: {failed} of {total} checks failed")
    }
}
