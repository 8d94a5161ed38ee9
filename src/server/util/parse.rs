use std::collections::HashMap;

use crate::server::{error::AppError, model::resource::Resource};

/// Parses the identity of a record from request query parameters.
///
/// # Arguments
/// - `params` - All query parameters of the request
///
/// # Returns
/// - `Ok(Key)` - The identity named by `R::KEY_PARAM`
/// - `Err(AppError::BadRequest)` - The parameter is missing or not a valid identity
pub fn parse_key<R: Resource>(params: &HashMap<String, String>) -> Result<R::Key, AppError> {
    let Some(value) = params.get(R::KEY_PARAM) else {
        return Err(AppError::BadRequest(format!(
            "Required request parameter '{}' is not present",
            R::KEY_PARAM
        )));
    };

    value.parse::<R::Key>().map_err(|_| {
        AppError::BadRequest(format!(
            "Invalid value '{}' for parameter '{}'",
            value,
            R::KEY_PARAM
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::{article::Articles, ucsb_organization::UcsbOrganizations};

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn parses_numeric_id() {
        let key = parse_key::<Articles>(&params(&[("id", "15")])).unwrap();
        assert_eq!(key, 15);
    }

    #[test]
    fn parses_id_beyond_32_bits() {
        let key = parse_key::<Articles>(&params(&[("id", "3000000000")])).unwrap();
        assert_eq!(key, 3_000_000_000);
    }

    #[test]
    fn rejects_missing_id() {
        let result = parse_key::<Articles>(&params(&[("orgCode", "ZPR")]));
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn rejects_non_numeric_id() {
        let result = parse_key::<Articles>(&params(&[("id", "abc")]));
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn organizations_use_org_code_parameter() {
        let key = parse_key::<UcsbOrganizations>(&params(&[("orgCode", "ZPR")])).unwrap();
        assert_eq!(key, "ZPR");

        let result = parse_key::<UcsbOrganizations>(&params(&[("id", "ZPR")]));
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
