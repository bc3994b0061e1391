use crate::{emit_success, Context};
use namestore::config::{self, NamestoreConfig};
use namestore::output::is_quiet;
use namestore::ui::{self, Icons};
use namestore::{NameRecord, NameStore};
use owo_colors::OwoColorize;

/// Names inserted by `demo`
const DEMO_NAMES: [&str; 2] = ["Khushi", "Alice"];

/// Acquire the store for a command and make sure the table exists.
///
/// Read-only connections skip schema creation, so listing a database
/// that was never initialised fails with the storage error.
fn open_store(ctx: &Context) -> anyhow::Result<NameStore> {
    if ctx.connection.read_only && ctx.connection.is_in_memory() {
        ui::warn("--read-only has no effect on an in-memory database");
    }
    if !ctx.connection.read_only {
        config::ensure_db_dir(&ctx.connection.database)?;
    }
    let store = NameStore::connect(&ctx.connection)?;
    if !store.is_read_only() {
        store.ensure_schema()?;
    }
    Ok(store)
}

pub fn run_init(ctx: &Context, write_config: bool, force: bool) -> anyhow::Result<()> {
    let store = open_store(ctx)?;
    let location = store.location();
    store.close()?;
    tracing::info!("Initialized name store at {}", location);

    if write_config {
        let file_config = NamestoreConfig {
            database: Some(ctx.connection.database.display().to_string()),
            read_only: Some(ctx.connection.read_only),
        };
        config::write_config(&ctx.config_path, &file_config, force)?;
        tracing::info!("Wrote config to {}", ctx.config_path.display());
    }

    if ctx.output_mode.is_human() {
        ui::success("Name store ready");
        ui::info("Database", &location);
        if write_config {
            ui::info("Config", &ctx.config_path.display().to_string());
        }
    } else {
        let data = serde_json::json!({
            "database": location,
            "config": write_config.then(|| ctx.config_path.display().to_string()),
        });
        emit_success(ctx.output_mode, "init", data)?;
    }
    Ok(())
}

pub fn run_add(ctx: &Context, names: &[String]) -> anyhow::Result<()> {
    let mut store = open_store(ctx)?;
    let ids = store.insert_many(names)?;
    store.close()?;
    tracing::info!("Added {} names", ids.len());

    let records: Vec<NameRecord> = ids
        .into_iter()
        .zip(names)
        .map(|(id, name)| NameRecord::new(id, name.as_str()))
        .collect();

    if ctx.output_mode.is_human() {
        for record in &records {
            println!("{} {}", Icons::PERSON, record);
        }
        ui::success(&format!("Stored {} name(s)", records.len()));
    } else {
        emit_success(ctx.output_mode, "add", serde_json::json!({ "records": records }))?;
    }
    Ok(())
}

pub fn run_list(ctx: &Context, with_ids: bool) -> anyhow::Result<()> {
    let store = open_store(ctx)?;

    if with_ids {
        let records = store.list_records()?;
        store.close()?;

        if ctx.output_mode.is_human() {
            if records.is_empty() {
                ui::info("Names", "none stored");
            } else {
                println!("{}", ui::names_table(&records));
            }
        } else {
            emit_success(ctx.output_mode, "list", serde_json::json!({ "records": records }))?;
        }
    } else {
        let names = store.list_all()?;
        store.close()?;

        if ctx.output_mode.is_human() {
            for name in &names {
                println!("{}", name);
            }
        } else {
            emit_success(ctx.output_mode, "list", serde_json::json!({ "names": names }))?;
        }
    }
    Ok(())
}

pub fn run_stats(ctx: &Context) -> anyhow::Result<()> {
    let store = open_store(ctx)?;
    let stats = store.stats()?;
    store.close()?;

    if ctx.output_mode.is_human() && is_quiet() {
        print!("{}", stats);
    } else if ctx.output_mode.is_human() {
        ui::header(&format!("{} Name store statistics", Icons::STATS));
        ui::section("Store");
        let names = stats.names.to_string();
        let mode = if ctx.connection.read_only { "read-only" } else { "read-write" };
        println!(
            "{}",
            ui::stats_table(&[
                ("Database", stats.location.as_str()),
                ("Names", names.as_str()),
                ("Mode", mode),
            ])
        );
    } else {
        let data = serde_json::json!({
            "database": stats.location,
            "names": stats.names,
            "read_only": ctx.connection.read_only,
        });
        emit_success(ctx.output_mode, "stats", data)?;
    }
    Ok(())
}

pub fn run_demo(ctx: &Context) -> anyhow::Result<()> {
    let store = open_store(ctx)?;

    if ctx.output_mode.is_human() {
        ui::header(&format!(
            "Demo against {} {}",
            Icons::DATABASE,
            store.location().bold().style(ui::theme().accent.clone())
        ));
        ui::section("Inserting sample names");
    }

    for name in DEMO_NAMES {
        let id = store.insert(name)?;
        if ctx.output_mode.is_human() {
            println!("{} {}", Icons::PERSON, NameRecord::new(id, name));
        }
    }
    let names = store.list_all()?;
    store.close()?;

    if ctx.output_mode.is_human() {
        ui::section("Result");
        println!("Names in database: {:?}", names);
    } else {
        emit_success(ctx.output_mode, "demo", serde_json::json!({ "names": names }))?;
    }
    Ok(())
}
