//! Non-interactive subcommands.

use std::io::{self, Read, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::{PrefsAction, TemplateAction};
use crate::clipboard;
use crate::config::Config;
use crate::extract::{self, ImageSource};
use crate::prefs::{self, UserPreference};
use crate::select::{self, Assignments};
use crate::storage::KvStore;
use crate::swatch::{self, ColorRecord};
use crate::template;

#[derive(Serialize)]
struct ExtractReport<'a> {
    image: String,
    records: &'a [ColorRecord],
    preference: UserPreference,
    assignments: &'a Assignments,
    result: Option<String>,
}

pub async fn extract(
    store: &dyn KvStore,
    config: &Config,
    image: &Path,
    json: bool,
    copy: bool,
) -> Result<()> {
    let source = if image == Path::new("-") {
        let mut bytes = Vec::new();
        io::stdin()
            .read_to_end(&mut bytes)
            .context("Failed to read image from stdin")?;
        ImageSource::Bytes(bytes)
    } else {
        ImageSource::Path(image.to_path_buf())
    };
    let swatches = extract::extract(Arc::new(config.extractor()), source)
        .await
        .with_context(|| format!("Failed to process image: {}", image.display()))?;

    let records = swatch::normalize(&swatches);
    let preference = prefs::load(store);
    let assignments = select::select(&records, &preference, &Assignments::default());
    let result = (!records.is_empty())
        .then(|| template::render(&template::load(store), &assignments));

    let mut out = io::stdout().lock();
    if json {
        let report = ExtractReport {
            image: image.display().to_string(),
            records: &records,
            preference,
            assignments: &assignments,
            result: result.clone(),
        };
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    } else {
        write_table(&mut out, &records, &preference)?;
        match &result {
            Some(rendered) => writeln!(out, "\n{rendered}")?,
            None => writeln!(out, "Unable to extract a palette from this image")?,
        }
    }

    if copy {
        if let Some(rendered) = &result {
            clipboard::write_text(rendered)?;
            tracing::info!("copied result to clipboard");
        }
    }
    Ok(())
}

fn write_table(
    out: &mut impl Write,
    records: &[ColorRecord],
    preference: &UserPreference,
) -> io::Result<()> {
    for record in records {
        let mut roles = Vec::new();
        if record.name == preference.light_theme_source {
            roles.push("light");
        }
        if record.name == preference.dark_theme_source {
            roles.push("dark");
        }
        writeln!(
            out,
            "{:<12} {} {:<16} {:>6.2}%  text {:<5} {}",
            record.name,
            record.hex,
            record.rgb.to_css(),
            record.population_share,
            record.text_color().css(),
            roles.join(",")
        )?;
    }
    Ok(())
}

pub fn template(store: &dyn KvStore, action: &TemplateAction) -> Result<()> {
    let mut out = io::stdout().lock();
    match action {
        TemplateAction::Show => writeln!(out, "{}", template::load(store))?,
        TemplateAction::Reset => {
            template::reset(store).context("Failed to reset template")?;
            writeln!(out, "template reset to default")?;
        }
        TemplateAction::Set { file } => {
            let content = read_input(file)?;
            template::save(store, &content).context("Failed to save template")?;
            writeln!(out, "template saved")?;
        }
    }
    Ok(())
}

fn read_input(file: &Path) -> Result<String> {
    if file == Path::new("-") {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read template from stdin")?;
        return Ok(content);
    }
    std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read template file: {}", file.display()))
}

pub fn prefs(store: &dyn KvStore, action: &PrefsAction) -> Result<()> {
    let pref = match action {
        PrefsAction::Show => prefs::load(store),
        PrefsAction::Reset => {
            let pref = UserPreference::default();
            prefs::save(store, &pref).context("Failed to save preference")?;
            pref
        }
        PrefsAction::Set { light, dark } => {
            let mut pref = prefs::load(store);
            if let Some(light) = light {
                pref.light_theme_source = *light;
            }
            if let Some(dark) = dark {
                pref.dark_theme_source = *dark;
            }
            prefs::save(store, &pref).context("Failed to save preference")?;
            pref
        }
    };
    writeln!(
        io::stdout().lock(),
        "light: {}\ndark: {}",
        pref.light_theme_source, pref.dark_theme_source
    )?;
    Ok(())
}
