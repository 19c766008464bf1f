use scraper::Html;
use log::{info, error};
use crate::error::ExtractError;
use crate::fetcher::{PageFetcher, Transport};
use crate::listing::selector;
use crate::models::{VacancyRecord, VacancyStub};

const DESCRIPTION_META: &str = r#"meta[name="description"]"#;
const KEYWORDS_META: &str = r#"meta[name="keywords"]"#;

/// Fetches every detail page in listing order and enriches the stubs.
/// The first failure aborts the phase; no partial result is returned.
pub fn extract_details<T: Transport>(
    fetcher: &PageFetcher<T>,
    stubs: Vec<VacancyStub>,
) -> Result<Vec<VacancyRecord>, ExtractError> {
    let mut records = Vec::with_capacity(stubs.len());

    for stub in stubs {
        let Some(page) = fetcher.fetch(&stub.url) else {
            error!("Cannot get vacancy details page. Revocation");
            return Err(ExtractError::DetailPageUnavailable { id: stub.id, url: stub.url });
        };

        info!("Parsing description of vacancy id: {}", stub.id);
        let record = parse_detail(stub, &page).inspect_err(|e| error!("{}. Revocation", e))?;
        records.push(record);
    }

    Ok(records)
}

/// Reads the description and location meta tags of one detail page.
pub fn parse_detail(stub: VacancyStub, page: &Html) -> Result<VacancyRecord, ExtractError> {
    let description = meta_content(page, DESCRIPTION_META).ok_or_else(|| ExtractError::MissingMeta {
        id: stub.id.clone(),
        name: "description",
    })?;
    let keywords = meta_content(page, KEYWORDS_META).ok_or_else(|| ExtractError::MissingMeta {
        id: stub.id.clone(),
        name: "keywords",
    })?;

    // "<title>,<locations>,<top location>,..."
    let segments: Vec<&str> = keywords.split(',').collect();
    let [_, locations, top_location, ..] = segments.as_slice() else {
        return Err(ExtractError::MalformedKeywords {
            id: stub.id,
            content: keywords.clone(),
        });
    };
    let (locations, top_location) = (locations.to_string(), top_location.to_string());

    VacancyRecord::new(stub, description, locations, top_location)
}

fn meta_content(page: &Html, css: &'static str) -> Option<String> {
    let meta = selector(css);
    page.select(&meta)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(str::to_string)
}
