//! Listing page extraction.
//!
//! The selectors below mirror the markup of the job board's search page and
//! break whenever that layout changes. They are kept here and in
//! [`crate::detail`] only.

use scraper::{ElementRef, Html, Selector};
use log::{info, warn};
use crate::models::VacancyStub;

/// Category headings; the vacancies follow the second one.
const CATEGORY_MARKER: &str =
    r#"div[class="large-text bold mrg-t5 mrg-b5 title-color search_sort_category_title"]"#;
const CATEGORY_MARKER_INDEX: usize = 1;
/// Each direct child of a container is one vacancy.
const VACANCY_CONTAINER: &str = r#"div[class="pure-g"]"#;
const TITLE: &str = "h3";
const COMPANY_NAME: &str = r#"span[id="company-name"]"#;
const JOB_URL_ATTR: &str = "data-job_url";

pub(crate) fn selector(css: &'static str) -> Selector {
    Selector::parse(css).expect("hard-coded selector must parse")
}

/// Text after the last `/`, or an empty string when there is none.
pub fn derive_id(link: &str) -> String {
    match link.rsplit_once('/') {
        Some((_, id)) => id.to_string(),
        None => {
            info!("Can not get identifier from url {}", link);
            String::new()
        }
    }
}

/// Collects the vacancy stubs of a listing page in page order.
/// Returns an empty vector when the expected layout is not found.
pub fn extract_listing(document: &Html, base_vacancy_url: &str) -> Vec<VacancyStub> {
    let marker_selector = selector(CATEGORY_MARKER);
    let Some(marker) = document.select(&marker_selector).nth(CATEGORY_MARKER_INDEX) else {
        warn!("Category marker not found on listing page");
        return Vec::new();
    };

    let container_selector = selector(VACANCY_CONTAINER);
    let title_selector = selector(TITLE);
    let company_selector = selector(COMPANY_NAME);

    let stubs: Vec<VacancyStub> = marker
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .flat_map(|sibling| sibling.descendants().filter_map(ElementRef::wrap))
        .filter(|element| container_selector.matches(element))
        .flat_map(|container| container.children().filter_map(ElementRef::wrap))
        .map(|element| parse_stub(element, base_vacancy_url, &title_selector, &company_selector))
        .collect();

    info!("Vacancies count : {}", stubs.len());
    stubs
}

fn parse_stub(
    element: ElementRef,
    base_vacancy_url: &str,
    title_selector: &Selector,
    company_selector: &Selector,
) -> VacancyStub {
    let id = match element.value().attr(JOB_URL_ATTR) {
        Some(link) => derive_id(link),
        None => {
            warn!("Vacancy block without {} attribute", JOB_URL_ATTR);
            String::new()
        }
    };

    // The board appends a stray character to every title.
    let title = match first_text(element, title_selector) {
        Some(mut text) => {
            text.pop();
            text
        }
        None => {
            warn!("Vacancy {} has no title", id);
            String::new()
        }
    };

    let company_name = first_text(element, company_selector).unwrap_or_else(|| {
        warn!("Vacancy {} has no company name", id);
        String::new()
    });

    VacancyStub {
        url: format!("{}{}", base_vacancy_url, id),
        id,
        title,
        company_name,
    }
}

/// Whitespace-collapsed text of the first match.
fn first_text(element: ElementRef, selector: &Selector) -> Option<String> {
    element.select(selector).next().map(|found| {
        let raw: String = found.text().collect();
        raw.split_whitespace().collect::<Vec<_>>().join(" ")
    })
}


#[cfg(test)]
mod tests {
    use super::*;
    use super::fixtures::{BASE, LISTING_PAGE};

    #[test]
    fn test_derive_id() {
        assert_eq!(derive_id("https://host/path/ABC123"), "ABC123");
        assert_eq!(derive_id("no-slash-string"), "");
        assert_eq!(derive_id("https://host/path/"), "");
    }

    #[test]
    fn test_extracts_vacancies_after_second_marker() {
        let document = Html::parse_document(LISTING_PAGE);
        let stubs = extract_listing(&document, BASE);

        assert_eq!(stubs.len(), 2);
        assert_eq!(stubs[0], VacancyStub {
            id: "7L6rnMmC".to_string(),
            url: "https://pier14.jacando.com/de/de/job/7L6rnMmC".to_string(),
            title: "Restaurantfachleute und Servicekräfte (m/w) ".to_string(),
            company_name: "Pier14 Unternehmensgruppe".to_string(),
        });
        assert_eq!(stubs[1].id, "Xy12AbCd");
        assert_eq!(stubs[1].title, "Koch (m/w)");
        assert_eq!(stubs[1].company_name, "Pier14 Küche");
    }

    #[test]
    fn test_missing_marker_yields_nothing() {
        let html = r#"<html><body>
<div class="large-text bold mrg-t5 mrg-b5 title-color search_sort_category_title">Only</div>
<div class="pure-g"><div data-job_url="/job/A"><h3>A*</h3></div></div>
</body></html>"#;
        let document = Html::parse_document(html);
        assert!(extract_listing(&document, BASE).is_empty());
    }

    #[test]
    fn test_class_must_match_exactly() {
        let html = r#"<html><body>
<div class="large-text bold mrg-t5 mrg-b5 title-color search_sort_category_title">A</div>
<div class="large-text bold mrg-t5 mrg-b5 title-color search_sort_category_title">B</div>
<div class="pure-g extra"><div data-job_url="/job/A"><h3>A*</h3></div></div>
</body></html>"#;
        let document = Html::parse_document(html);
        assert!(extract_listing(&document, BASE).is_empty());
    }

    #[test]
    fn test_missing_fields_become_empty() {
        let html = r#"<html><body>
<div class="large-text bold mrg-t5 mrg-b5 title-color search_sort_category_title">A</div>
<div class="large-text bold mrg-t5 mrg-b5 title-color search_sort_category_title">B</div>
<div class="pure-g"><div><p>broken block</p></div></div>
</body></html>"#;
        let document = Html::parse_document(html);
        let stubs = extract_listing(&document, BASE);

        assert_eq!(stubs.len(), 1);
        assert_eq!(stubs[0].id, "");
        assert_eq!(stubs[0].url, BASE);
        assert_eq!(stubs[0].title, "");
        assert_eq!(stubs[0].company_name, "");
    }

    #[test]
    fn test_duplicate_ids_pass_through() {
        let html = r#"<html><body>
<div class="large-text bold mrg-t5 mrg-b5 title-color search_sort_category_title">A</div>
<div class="large-text bold mrg-t5 mrg-b5 title-color search_sort_category_title">B</div>
<div class="pure-g">
  <div data-job_url="/job/SAME"><h3>First*</h3></div>
  <div data-job_url="/job/SAME"><h3>Second*</h3></div>
</div>
</body></html>"#;
        let document = Html::parse_document(html);
        let stubs = extract_listing(&document, BASE);

        let ids: Vec<&str> = stubs.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["SAME", "SAME"]);
        assert_eq!(stubs[0].title, "First");
        assert_eq!(stubs[1].title, "Second");
    }
}
