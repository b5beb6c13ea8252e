use serde::{Deserialize, Serialize};

/// One link relation as written in the YAML catalog.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LinkSettings {
    pub rel: String,
    pub description: String,
    pub template: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composite: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde() {
        let settings = LinkSettings {
            rel: "user".to_string(),
            description: "test".to_string(),
            template: "/users/{userId}".to_string(),
            composite: None,
        };

        let yml = serde_yaml::to_string(&settings).unwrap();
        let deserde: LinkSettings = serde_yaml::from_str(&yml).unwrap();
        assert_eq!(settings, deserde);
    }

    #[test]
    fn test_skip_none_fields_in_yaml() {
        let settings = LinkSettings {
            rel: "users".to_string(),
            description: "All users".to_string(),
            template: "/users{?keyWords*}".to_string(),
            composite: None,
        };

        let yml = serde_yaml::to_string(&settings).unwrap();

        assert!(!yml.contains("composite:"));
        assert!(yml.contains("rel:"));
        assert!(yml.contains("description:"));
        assert!(yml.contains("template:"));
    }

    #[test]
    fn test_parse_list_from_yaml() {
        let yml = r#"
- rel: user
  description: A single user
  template: /users/{userId}
- rel: users
  description: Search users
  template: /users{?keyWords*,limit}
  composite: true
"#;
        let settings: Vec<LinkSettings> = serde_yaml::from_str(yml).unwrap();
        assert_eq!(settings.len(), 2);
        assert_eq!(settings[0].composite, None);
        assert_eq!(settings[1].composite, Some(true));
        assert_eq!(settings[1].template, "/users{?keyWords*,limit}");
    }

    #[test]
    fn test_include_some_fields_in_json() {
        let settings = LinkSettings {
            rel: "users".to_string(),
            description: "Search users".to_string(),
            template: "/users{?keyWords*}".to_string(),
            composite: Some(false),
        };

        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"composite\":false"));
    }
}
