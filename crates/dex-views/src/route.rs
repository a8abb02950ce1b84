//! Navigable screens and their paths.

use std::fmt;
use std::str::FromStr;

use dex_core::CoreError;
use serde::Serialize;

const DETAIL_PREFIX: &str = "/pokemonDetails";
const QUARANTINE_PATH: &str = "/integrity-alert";

/// A screen the client can navigate to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Route {
    /// Catalog root (paginated list and search).
    Catalog,
    /// Detail view of one entry, by canonical name.
    Detail { name: String },
    /// Integrity alert for the locked entry.
    Quarantine { pokemon: String },
}

impl Route {
    pub fn detail(name: impl Into<String>) -> Self {
        Self::Detail { name: name.into() }
    }

    pub fn quarantine(pokemon: impl Into<String>) -> Self {
        Self::Quarantine {
            pokemon: pokemon.into(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Catalog => f.write_str("/"),
            Self::Detail { name } => {
                write!(f, "{DETAIL_PREFIX}/{}", urlencoding::encode(name))
            }
            Self::Quarantine { pokemon } => {
                write!(f, "{QUARANTINE_PATH}?pokemon={}", urlencoding::encode(pokemon))
            }
        }
    }
}

impl FromStr for Route {
    type Err = CoreError;

    /// Parses the paths produced by `Display`. A bare `/pokemonDetails`
    /// resolves to the catalog.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (path, query) = s.split_once('?').unwrap_or((s, ""));
        let path = path.trim_end_matches('/');

        if path.is_empty() || path == DETAIL_PREFIX {
            return Ok(Self::Catalog);
        }

        if let Some(name) = path.strip_prefix(DETAIL_PREFIX).and_then(|rest| rest.strip_prefix('/')) {
            let name = decode(name)?;
            if name.trim().is_empty() {
                return Ok(Self::Catalog);
            }
            return Ok(Self::Detail { name });
        }

        if path == QUARANTINE_PATH {
            let pokemon = query
                .split('&')
                .filter_map(|pair| pair.split_once('='))
                .find(|(key, _)| *key == "pokemon")
                .map(|(_, value)| decode(&value.replace('+', " ")))
                .transpose()?
                .unwrap_or_default();
            return Ok(Self::Quarantine { pokemon });
        }

        Err(CoreError::Validation(format!("unknown route '{s}'")))
    }
}

fn decode(raw: &str) -> Result<String, CoreError> {
    urlencoding::decode(raw)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| CoreError::Validation(format!("invalid escape in route: {e}")))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn renders_paths() {
        assert_eq!(Route::Catalog.to_string(), "/");
        assert_eq!(
            Route::detail("Mr. Mime").to_string(),
            "/pokemonDetails/Mr.%20Mime"
        );
        assert_eq!(
            Route::quarantine("Pikachu").to_string(),
            "/integrity-alert?pokemon=Pikachu"
        );
    }

    #[rstest]
    #[case("/", Route::Catalog)]
    #[case("", Route::Catalog)]
    #[case("/pokemonDetails", Route::Catalog)]
    #[case("/pokemonDetails/", Route::Catalog)]
    #[case("/pokemonDetails/Pikachu", Route::detail("Pikachu"))]
    #[case("/pokemonDetails/Flab%C3%A9b%C3%A9", Route::detail("Flabébé"))]
    #[case("/integrity-alert?pokemon=Mr.%20Mime", Route::quarantine("Mr. Mime"))]
    #[case("/integrity-alert?from=x&pokemon=Eevee", Route::quarantine("Eevee"))]
    #[case("/integrity-alert", Route::quarantine(""))]
    fn parses_paths(#[case] input: &str, #[case] expected: Route) {
        assert_eq!(input.parse::<Route>().unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_paths() {
        assert!("/settings".parse::<Route>().is_err());
    }

    #[test]
    fn display_then_parse_preserves_names() {
        for route in [Route::detail("Nidoran♀"), Route::quarantine("Farfetch'd")] {
            assert_eq!(route.to_string().parse::<Route>().unwrap(), route);
        }
    }
}
