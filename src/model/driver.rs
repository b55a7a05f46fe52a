use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub driver_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permanent_number: Option<String>,
    // historic drivers have no three-letter code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default)]
    pub url: String,
    pub given_name: String,
    pub family_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub nationality: String,
}

impl Driver {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }

    /// Three-letter code, or the family name when the provider has none.
    #[must_use]
    pub fn short_label(&self) -> &str {
        self.code.as_deref().unwrap_or(&self.family_name)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Constructor {
    pub constructor_id: String,
    #[serde(default)]
    pub url: String,
    pub name: String,
    #[serde(default)]
    pub nationality: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DriverTable {
    #[serde(default)]
    pub season: String,
    #[serde(rename = "Drivers", default)]
    pub drivers: Vec<Driver>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_label_falls_back_to_family_name() {
        let driver: Driver = serde_json::from_value(serde_json::json!({
            "driverId": "fangio",
            "url": "http://en.wikipedia.org/wiki/Juan_Manuel_Fangio",
            "givenName": "Juan",
            "familyName": "Fangio",
            "dateOfBirth": "1911-06-24",
            "nationality": "Argentine"
        }))
        .unwrap();
        assert_eq!(driver.short_label(), "Fangio");
        assert_eq!(driver.full_name(), "Juan Fangio");
        assert!(driver.permanent_number.is_none());
    }
}
