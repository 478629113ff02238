use sea_orm::{ActiveValue, Value};

/// A body field bound to a NOT NULL column. Absent fields stay out of the
/// statement, so the store decides (column default or constraint failure).
pub fn provided<T>(value: Option<T>) -> ActiveValue<T>
where
    T: Into<Value>,
{
    match value {
        Some(v) => ActiveValue::Set(v),
        None => ActiveValue::NotSet,
    }
}

/// A body field bound to a nullable column on insert.
pub fn provided_nullable<T>(value: Option<T>) -> ActiveValue<Option<T>>
where
    Option<T>: Into<Value>,
{
    match value {
        Some(v) => ActiveValue::Set(Some(v)),
        None => ActiveValue::NotSet,
    }
}

/// A body field bound to a nullable column on update. Updates replace every
/// declared field, so an absent value clears the column.
pub fn replaced<T>(value: Option<T>) -> ActiveValue<Option<T>>
where
    Option<T>: Into<Value>,
{
    ActiveValue::Set(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_are_not_set() {
        assert_eq!(provided::<String>(None), ActiveValue::NotSet);
        assert_eq!(provided_nullable::<i32>(None), ActiveValue::NotSet);
    }

    #[test]
    fn test_present_fields_are_set() {
        assert_eq!(
            provided(Some("Engineering".to_string())),
            ActiveValue::Set("Engineering".to_string())
        );
        assert_eq!(provided_nullable(Some(3)), ActiveValue::Set(Some(3)));
    }

    #[test]
    fn test_replaced_clears_absent_values() {
        assert_eq!(replaced::<String>(None), ActiveValue::Set(None));
        assert_eq!(
            replaced(Some("555-0100".to_string())),
            ActiveValue::Set(Some("555-0100".to_string()))
        );
    }
}
