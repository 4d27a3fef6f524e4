/// List stored debriefs as a console table, newest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub(crate) async fn run_debrief_list(pool: &sqlx::PgPool, limit: i64) -> anyhow::Result<()> {
    let debriefs = intelbrief_db::list_debriefs(pool, limit).await?;

    if debriefs.is_empty() {
        println!("no debriefs found; run `debrief generate` first");
        return Ok(());
    }

    let header = format!(
        "{:<27}{:<18}{:<25}{:<7}CHARS",
        "ID", "GENERATED", "PERIOD", "ITEMS"
    );
    println!("{header}");
    for debrief in &debriefs {
        let generated = debrief.generated_at.format("%Y-%m-%d %H:%M");
        let period = format!(
            "{} .. {}",
            debrief.period_start.format("%Y-%m-%d"),
            debrief.period_end.format("%Y-%m-%d")
        );
        println!(
            "{:<27}{:<18}{:<25}{:<7}{}",
            debrief.id,
            generated,
            period,
            debrief.item_count,
            debrief.content.chars().count()
        );
    }

    Ok(())
}

/// Print the most recently generated debrief in full.
///
/// # Errors
///
/// Returns an error if no debrief exists or the database query fails.
pub(crate) async fn run_debrief_show(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let debrief = intelbrief_db::get_latest_debrief(pool)
        .await?
        .ok_or_else(|| anyhow::anyhow!("no debriefs found; run `debrief generate` first"))?;

    println!(
        "Debrief {} \u{2014} {} items, {} to {}",
        debrief.id,
        debrief.item_count,
        debrief.period_start.format("%Y-%m-%d"),
        debrief.period_end.format("%Y-%m-%d")
    );
    println!("Generated: {}", debrief.generated_at.format("%Y-%m-%d %H:%M UTC"));
    println!();
    println!("{}", debrief.content);

    Ok(())
}
