use anyhow::Result;
use owo_colors::OwoColorize;
use serde_json::{Map, Value};

use npeek_constants::keys;
use npeek_registry::NpmCollector;

pub struct InfoHandler;

impl InfoHandler {
    pub fn handle_info(spec: &str, json: bool, quiet: bool, debug: bool) -> Result<()> {
        npeek_logger::init_logger(quiet || json);

        let mut collector = NpmCollector::new(spec);
        npeek_logger::debug(&format!("GET {}", collector.metadata_url()), debug);
        npeek_logger::debug(&format!("GET {}", collector.downloads_url()), debug);
        npeek_logger::status(&format!("Fetching {}", collector.package_name()));

        if let Err(e) = collector.fetch() {
            npeek_logger::error(&e.to_string());
            return Err(e.into());
        }

        let data = collector.get_all_data();

        if json {
            println!("{}", serde_json::to_string_pretty(&Value::Object(data))?);
            return Ok(());
        }

        Self::print_summary(&collector, &data);
        npeek_logger::finish("done");
        Ok(())
    }

    fn print_summary(collector: &NpmCollector, data: &Map<String, Value>) {
        let name = collector.package_name();
        match collector.version_tag() {
            Some(tag) => println!("{} {}", name.bold(), format!("@{tag}").bright_black()),
            None => println!("{}", name.bold()),
        }

        if let Some(description) = string_field(data, "description") {
            println!("  {description}");
        }
        if let Some(license) = string_field(data, "license") {
            println!("  {} {license}", "license:".bright_black());
        }
        if let Some(homepage) = string_field(data, "homepage") {
            println!("  {} {homepage}", "homepage:".bright_black());
        }

        let dist_tags = data.get("dist-tags").and_then(Value::as_object);
        if let Some(latest) = dist_tags
            .and_then(|tags| tags.get("latest"))
            .and_then(Value::as_str)
        {
            println!("  {} {latest}", "latest:".bright_black());
        }

        // Resolve the requested dist-tag to a concrete version when
        // the registry knows it
        if let Some(tag) = collector.version_tag() {
            if let Some(resolved) = dist_tags.and_then(|tags| tags.get(tag)).and_then(Value::as_str)
            {
                println!("  {} {tag} -> {resolved}", "tag:".bright_black());
            }
        }

        if let Some(count) = data
            .get(keys::DOWNLOADS)
            .and_then(|d| d.get("downloads"))
            .and_then(Value::as_u64)
        {
            println!("  {} {count}", "downloads (last month):".bright_black());
        }
    }
}

fn string_field<'a>(data: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    data.get(key).and_then(Value::as_str)
}
