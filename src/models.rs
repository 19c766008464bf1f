use crate::error::ExtractError;

/// Vacancy identity as it appears on the listing page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VacancyStub {
    pub id: String,
    pub url: String,
    pub title: String,
    pub company_name: String,
}

/// A vacancy enriched with the fields of its detail page, ready for export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VacancyRecord {
    pub id: String,
    pub url: String,
    pub title: String,
    pub company_name: String,
    pub description: String,
    /// Raw location segment, several locations are joined with `&`.
    pub locations: String,
    pub top_location: String,
}

impl VacancyRecord {
    /// Builds a record from its stub. Fails when `description` is empty.
    pub fn new(
        stub: VacancyStub,
        description: String,
        locations: String,
        top_location: String,
    ) -> Result<Self, ExtractError> {
        if description.is_empty() {
            return Err(ExtractError::EmptyDescription { id: stub.id });
        }

        Ok(VacancyRecord {
            id: stub.id,
            url: stub.url,
            title: stub.title,
            company_name: stub.company_name,
            description,
            locations,
            top_location,
        })
    }

    pub fn location_list(&self) -> impl Iterator<Item = &str> {
        self.locations.split('&')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stub() -> VacancyStub {
        VacancyStub {
            id: "7L6rnMmC".to_string(),
            url: "https://pier14.jacando.com/de/de/job/7L6rnMmC".to_string(),
            title: "Koch".to_string(),
            company_name: "Pier14 Unternehmensgruppe".to_string(),
        }
    }

    #[test]
    fn test_record_rejects_empty_description() {
        let result = VacancyRecord::new(stub(), String::new(), "Berlin".into(), "Berlin".into());
        assert!(matches!(result, Err(ExtractError::EmptyDescription { id }) if id == "7L6rnMmC"));
    }

    #[test]
    fn test_location_list_splits_on_ampersand() {
        let record = VacancyRecord::new(
            stub(),
            "Join us".into(),
            "Berlin&Hamburg".into(),
            "Berlin".into(),
        )
        .unwrap();
        let locations: Vec<&str> = record.location_list().collect();
        assert_eq!(locations, vec!["Berlin", "Hamburg"]);
    }
}
