/// Shopper gender a catalog item is merchandised for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Men,
    Women,
    Kids,
}

impl Gender {
    /// Raw catalog labels (lowercase) that resolve to this gender.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Gender::Men => &["men"],
            Gender::Women => &["women"],
            Gender::Kids => &["kids", "boys", "girls"],
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Men => write!(f, "Men"),
            Gender::Women => write!(f, "Women"),
            Gender::Kids => write!(f, "Kids"),
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "men" => Ok(Gender::Men),
            "women" => Ok(Gender::Women),
            "kids" | "boys" | "girls" => Ok(Gender::Kids),
            _ => Err(format!("Unsupported gender: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_gender_ignoring_case() {
        assert_eq!("men".parse::<Gender>().unwrap(), Gender::Men);
        assert_eq!(" WOMEN ".parse::<Gender>().unwrap(), Gender::Women);
        assert_eq!("Kids".parse::<Gender>().unwrap(), Gender::Kids);
    }

    #[test]
    fn should_fold_boys_and_girls_into_kids() {
        assert_eq!("Boys".parse::<Gender>().unwrap(), Gender::Kids);
        assert_eq!("Girls".parse::<Gender>().unwrap(), Gender::Kids);
    }

    #[test]
    fn should_reject_unisex_and_blank() {
        assert!("Unisex".parse::<Gender>().is_err());
        assert!("".parse::<Gender>().is_err());
    }

    #[test]
    fn should_list_every_alias_that_parses_back() {
        for gender in [Gender::Men, Gender::Women, Gender::Kids] {
            for alias in gender.aliases() {
                assert_eq!(alias.parse::<Gender>().unwrap(), gender);
            }
        }
    }
}
