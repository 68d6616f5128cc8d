use crate::{Error, Result};

use indexmap::IndexMap;

/// What generated code needs to know about a named type mapper.
///
/// Type paths and the constructor expression are Rust source text. The
/// `$crate` placeholder stands for the runtime crate path configured for the
/// generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapperInfo {
    /// Entity side type, e.g. `::std::string::String`.
    pub language_type: String,

    /// Database side type.
    pub database_type: String,

    /// Expression evaluating to the mapper.
    pub constructor: String,

    /// The mapper passes values through unchanged.
    pub identity: bool,

    /// Language values have a total order, so fields get the comparison facet.
    pub orderable: bool,
}

/// Type mappers by the name columns refer to them with.
#[derive(Debug, Clone)]
pub struct MapperRegistry {
    mappers: IndexMap<String, MapperInfo>,
}

impl MapperInfo {
    pub fn language_type_in(&self, runtime: &str) -> String {
        self.language_type.replace("$crate", runtime)
    }

    pub fn database_type_in(&self, runtime: &str) -> String {
        self.database_type.replace("$crate", runtime)
    }

    pub fn constructor_in(&self, runtime: &str) -> String {
        self.constructor.replace("$crate", runtime)
    }
}

impl MapperRegistry {
    /// A registry without any mapper.
    pub fn empty() -> Self {
        Self {
            mappers: IndexMap::new(),
        }
    }

    /// The mappers shipped with this crate.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();

        for (name, ty, orderable) in [
            ("identity:i16", "i16", true),
            ("identity:i32", "i32", true),
            ("identity:i64", "i64", true),
            ("identity:bool", "bool", true),
            ("identity:string", "::std::string::String", true),
            ("identity:f64", "f64", false),
            ("identity:bytes", "::std::vec::Vec<u8>", true),
        ] {
            registry.register(
                name,
                MapperInfo {
                    language_type: ty.to_string(),
                    database_type: ty.to_string(),
                    constructor: format!("$crate::mapper::IdentityMapper::<{ty}>::new()"),
                    identity: true,
                    orderable,
                },
            );
        }

        registry.register(
            "clob_to_string",
            MapperInfo {
                language_type: "::std::string::String".to_string(),
                database_type: "$crate::connection::ClobRef".to_string(),
                constructor: "$crate::mapper::ClobToStringMapper::new()".to_string(),
                identity: false,
                orderable: true,
            },
        );

        registry.register(
            "int_to_bool",
            MapperInfo {
                language_type: "bool".to_string(),
                database_type: "i32".to_string(),
                constructor: "$crate::mapper::IntToBoolMapper::new()".to_string(),
                identity: false,
                orderable: true,
            },
        );

        registry
    }

    /// Adds a mapper, replacing any mapper registered under the same name.
    pub fn register(&mut self, name: impl Into<String>, info: MapperInfo) -> &mut Self {
        self.mappers.insert(name.into(), info);
        self
    }

    pub fn get(&self, name: &str) -> Result<&MapperInfo> {
        self.mappers
            .get(name)
            .ok_or_else(|| Error::invalid_schema(format!("unknown type mapper `{name}`")))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.mappers.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.mappers.keys().map(String::as_str)
    }
}

impl Default for MapperRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
