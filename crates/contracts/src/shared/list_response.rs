use serde::{Deserialize, Serialize};

use super::error::FetchError;

/// Конверт ответа коллекции: `{ "data": [...] }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn into_data(self) -> Vec<T> {
        self.data
    }
}

impl<T: serde::de::DeserializeOwned> ListResponse<T> {
    /// Разобрать тело ответа. Любая другая форма считается ошибкой загрузки.
    pub fn parse(body: &str) -> Result<Vec<T>, FetchError> {
        serde_json::from_str::<ListResponse<T>>(body)
            .map(ListResponse::into_data)
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product_category::aggregate::Category;

    #[test]
    fn test_parse_envelope() {
        let items = ListResponse::<Category>::parse(r#"{"data":[{"id":1,"name":"Kari"}]}"#)
            .unwrap();
        assert_eq!(items, vec![Category::new(1, "Kari")]);
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert!(matches!(
            ListResponse::<Category>::parse(r#"[{"id":1,"name":"Kari"}]"#),
            Err(FetchError::Decode(_))
        ));
        assert!(matches!(
            ListResponse::<Category>::parse(r#"{"data":null}"#),
            Err(FetchError::Decode(_))
        ));
        assert!(matches!(
            ListResponse::<Category>::parse("<html>"),
            Err(FetchError::Decode(_))
        ));
    }
}
