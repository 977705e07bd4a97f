/// Builds a `Params` map for `where`, `values` and `set`.
///
/// Identifier keys cover plain columns. Literal keys are needed when the key
/// carries its own comparison operator.
///
/// # Example
///
/// ```
/// use sqlparts::params;
///
/// let by_name = params!(name = "joe", age = 19);
/// let adults = params!("age>=" => 18, "role" => vec!["admin", "user"]);
/// assert_eq!(by_name.len(), 2);
/// assert_eq!(adults.len(), 2);
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::types::Params::new()
    };

    ($($key:ident = $value:expr),+ $(,)?) => {
        {
            let mut params = $crate::types::Params::new();
            $(
                params.insert(
                    stringify!($key).to_string(),
                    $crate::types::Value::from($value),
                );
            )+
            params
        }
    };

    ($($key:literal => $value:expr),+ $(,)?) => {
        {
            let mut params = $crate::types::Params::new();
            $(
                params.insert(
                    $key.to_string(),
                    $crate::types::Value::from($value),
                );
            )+
            params
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::types::Value;

    #[test]
    fn test_params_ident_keys() {
        let params = params!(id = 5, name = "joe", weight = 80.5);
        assert_eq!(params["id"], Value::Integer(5));
        assert_eq!(params["name"], Value::Text("joe".into()));
        assert_eq!(params["weight"], Value::Float(80.5));
    }

    #[test]
    fn test_params_literal_keys() {
        let params = params!("age>" => 18, "id" => vec![1, 2]);
        assert_eq!(params["age>"], Value::Integer(18));
        assert_eq!(params["id"], Value::IntegerList(vec![1, 2]));
    }

    #[test]
    fn test_params_empty() {
        assert!(params!().is_empty());
    }
}
