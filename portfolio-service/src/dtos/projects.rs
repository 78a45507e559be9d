use crate::models::Project;
use serde::{Deserialize, Serialize};
use service_core::error::AppError;

const DEFAULT_PAGE: usize = 1;
const DEFAULT_LIMIT: usize = 10;

/// Raw query string of `GET /api/projects`.
///
/// Numbers are kept as strings so malformed values can be answered with a
/// JSON 400 rather than the extractor's plain-text rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectListParams {
    pub status: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    pub all: Option<String>,
}

/// What slice of the filtered projects to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    /// `all=true`: the whole filtered collection, no paging metadata.
    All,
    Page { page: usize, limit: usize },
}

impl ProjectListParams {
    /// Status to filter on. Absent, empty and `all` mean no filter.
    pub fn status_filter(&self) -> Option<&str> {
        self.status
            .as_deref()
            .filter(|s| !s.is_empty() && *s != "all")
    }

    pub fn page_request(&self) -> Result<PageRequest, AppError> {
        if self.all.as_deref() == Some("true") {
            return Ok(PageRequest::All);
        }

        Ok(PageRequest::Page {
            page: parse_positive("page", self.page.as_deref(), DEFAULT_PAGE)?,
            limit: parse_positive("limit", self.limit.as_deref(), DEFAULT_LIMIT)?,
        })
    }
}

fn parse_positive(name: &str, raw: Option<&str>, default: usize) -> Result<usize, AppError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(default);
    };

    match raw.parse::<usize>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(AppError::BadRequest(anyhow::anyhow!(
            "{} must be a positive integer",
            name
        ))),
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectListResponse {
    pub data: Vec<Project>,
    pub total: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl ProjectListResponse {
    /// Apply `request` to an already filtered collection. `total` always
    /// counts the filtered collection, not the page.
    pub fn paginate(filtered: Vec<Project>, request: PageRequest) -> Self {
        let total = filtered.len();

        match request {
            PageRequest::All => Self {
                data: filtered,
                total,
                page: None,
                limit: None,
            },
            PageRequest::Page { page, limit } => {
                let offset = page.saturating_sub(1).saturating_mul(limit);
                Self {
                    data: filtered.into_iter().skip(offset).take(limit).collect(),
                    total,
                    page: Some(page),
                    limit: Some(limit),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::seed;

    fn params(page: Option<&str>, limit: Option<&str>, all: Option<&str>) -> ProjectListParams {
        ProjectListParams {
            status: None,
            page: page.map(String::from),
            limit: limit.map(String::from),
            all: all.map(String::from),
        }
    }

    #[test]
    fn defaults_to_first_page_of_ten() {
        assert_eq!(
            params(None, None, None).page_request().unwrap(),
            PageRequest::Page { page: 1, limit: 10 }
        );
    }

    #[test]
    fn all_true_bypasses_paging_even_with_bad_numbers() {
        assert_eq!(
            params(Some("abc"), Some("-1"), Some("true")).page_request().unwrap(),
            PageRequest::All
        );
        assert!(params(Some("abc"), None, Some("TRUE")).page_request().is_err());
    }

    #[test]
    fn rejects_non_numeric_and_non_positive_values() {
        for (page, limit) in [("abc", "10"), ("0", "10"), ("1", "-5"), ("1", "0"), ("1.5", "2")] {
            assert!(
                params(Some(page), Some(limit), None).page_request().is_err(),
                "page={} limit={}",
                page,
                limit
            );
        }
    }

    #[test]
    fn status_all_or_empty_means_no_filter() {
        let mut p = ProjectListParams::default();
        assert_eq!(p.status_filter(), None);
        p.status = Some("all".to_string());
        assert_eq!(p.status_filter(), None);
        p.status = Some(String::new());
        assert_eq!(p.status_filter(), None);
        p.status = Some("draft".to_string());
        assert_eq!(p.status_filter(), Some("draft"));
    }

    #[test]
    fn second_page_of_one_returns_second_item() {
        let response =
            ProjectListResponse::paginate(seed::projects(), PageRequest::Page { page: 2, limit: 1 });

        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].id, "2");
        assert_eq!(response.total, 2);
        assert_eq!(response.page, Some(2));
        assert_eq!(response.limit, Some(1));
    }

    #[test]
    fn page_past_the_end_is_empty_not_an_error() {
        let response =
            ProjectListResponse::paginate(seed::projects(), PageRequest::Page { page: 5, limit: 10 });

        assert!(response.data.is_empty());
        assert_eq!(response.total, 2);
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let response = ProjectListResponse::paginate(
            seed::projects(),
            PageRequest::Page {
                page: usize::MAX,
                limit: usize::MAX,
            },
        );

        assert!(response.data.is_empty());
    }

    #[test]
    fn all_serializes_without_paging_fields() {
        let response = ProjectListResponse::paginate(seed::projects(), PageRequest::All);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["total"], 2);
        assert!(json.get("page").is_none());
        assert!(json.get("limit").is_none());
    }
}
