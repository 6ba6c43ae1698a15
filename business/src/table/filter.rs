//! Global search predicates.

/// Predicate deciding whether `row` matches `query` for the given column id.
///
/// The engine keeps a row when the predicate holds for any column. Entity
/// predicates usually ignore the column id and search a fixed field set.
pub type GlobalFilterFn<T> = fn(&T, &str, &str) -> bool;

/// Rows that expose their top-level string fields for the fallback search.
pub trait Searchable {
    fn string_fields(&self) -> Vec<&str>;
}

/// Case-insensitive substring match over every declared string field.
pub fn default_global_filter<T: Searchable>(row: &T, _column_id: &str, query: &str) -> bool {
    contains_any(row.string_fields(), query)
}

/// True if the lowercased `query` is a substring of any lowercased field.
pub fn contains_any<'a>(fields: impl IntoIterator<Item = &'a str>, query: &str) -> bool {
    let query = query.to_lowercase();
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(&query))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pet {
        name: String,
        kind: String,
        age: u8,
    }

    impl Searchable for Pet {
        fn string_fields(&self) -> Vec<&str> {
            vec![self.name.as_str(), self.kind.as_str()]
        }
    }

    #[test]
    fn test_default_filter_is_case_insensitive() {
        let pet = Pet {
            name: "Rex".to_owned(),
            kind: "Dog".to_owned(),
            age: 3,
        };
        assert!(default_global_filter(&pet, "name", "rex"));
        assert!(default_global_filter(&pet, "name", "DO"));
        assert!(!default_global_filter(&pet, "name", "cat"));
        assert_eq!(pet.age, 3);
    }

    #[test]
    fn test_contains_any_empty_fields() {
        assert!(!contains_any(Vec::<&str>::new(), "x"));
        assert!(contains_any(["", "abc"], "B"));
    }
}
