use anyhow::Result;

use crate::App;

/// Execute health check command
///
/// Always reports exit code 0; the per-probe indicators carry the result.
pub async fn execute(app: &App) -> Result<i32> {
    println!("\n🏥 Stack Health Check\n");
    println!("{:-<60}", "");

    let report = app.health().await;
    print!("{report}");

    println!("{:-<60}", "");
    if report.all_healthy() {
        println!("\n✅ All probes passed\n");
    } else {
        println!("\n⚠️  Some probes failed\n");
    }

    Ok(0)
}
