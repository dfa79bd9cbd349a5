use npeek_registry::NpmCollector;

pub struct UrlsHandler;

impl UrlsHandler {
    pub fn handle_urls(spec: &str) {
        let collector = NpmCollector::new(spec);
        println!("{}", collector.metadata_url());
        println!("{}", collector.downloads_url());
    }
}
