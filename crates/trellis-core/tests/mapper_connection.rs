use std::sync::Arc;

use trellis_core::connection::*;
use trellis_core::mapper::{ClobToStringMapper, TypeMapper};
use trellis_core::{Error, Result};

/// A connection that hands out in-memory clobs until it is closed.
#[derive(Debug, Default)]
struct FakeConnection {
    closed: bool,
}

impl CreateFromConnection for FakeConnection {
    fn create_clob(&self) -> Result<ClobRef> {
        if self.closed {
            return Err(Error::connection_closed());
        }
        Ok(Box::new(StringClob::default()))
    }

    fn create_blob(&self) -> Result<BlobRef> {
        Ok(Box::new(ByteBlob::default()))
    }

    fn create_nclob(&self) -> Result<ClobRef> {
        Err(Error::unsupported_feature("createNClob"))
    }

    fn create_sqlxml(&self) -> Result<Box<dyn SqlXml>> {
        Ok(Box::new(StringSqlXml::default()))
    }

    fn create_array_of(&self, type_name: &str, elements: Vec<SqlValue>) -> Result<SqlArray> {
        Ok(SqlArray::new(type_name, elements))
    }

    fn create_struct(&self, _type_name: &str, _attributes: Vec<SqlValue>) -> Result<SqlStruct> {
        Err(Error::unsupported_feature("createStruct"))
    }
}

#[test]
fn clob_created_by_the_connection() {
    let mapper = ClobToStringMapper::with_connection(Arc::new(FakeConnection::default()));

    let clob = mapper
        .to_database_value(Some(&"stored".to_string()))
        .unwrap()
        .unwrap();
    assert_eq!(clob.length().unwrap(), 6);
    assert_eq!(
        mapper.to_language_value(Some(&clob)).unwrap().as_deref(),
        Some("stored")
    );
}

#[test]
fn capability_errors_surface_unchanged() {
    let mapper = ClobToStringMapper::with_connection(Arc::new(FakeConnection { closed: true }));

    let err = mapper
        .to_database_value(Some(&"stored".to_string()))
        .unwrap_err();
    assert!(err.is_connection_closed());
    assert_eq!(err.to_string(), "connection is closed");
}

#[test]
fn clob_read_failure_keeps_its_cause() {
    #[derive(Debug)]
    struct BrokenClob;

    impl Clob for BrokenClob {
        fn length(&self) -> Result<u64> {
            Ok(4)
        }

        fn sub_string(&self, _pos: u64, _len: usize) -> Result<String> {
            Err(Error::driver(std::io::Error::new(
                std::io::ErrorKind::Other,
                "stream reset",
            )))
        }

        fn set_string(&mut self, _pos: u64, _value: &str) -> Result<usize> {
            Ok(0)
        }
    }

    let clob: ClobRef = Box::new(BrokenClob);
    let err = ClobToStringMapper::new()
        .to_language_value(Some(&clob))
        .unwrap_err();

    assert!(err.is_type_conversion());
    assert!(err.cause().is_some_and(Error::is_driver));
    assert_eq!(
        err.to_string(),
        "cannot convert value: unable to convert Clob to String: stream reset"
    );
}

#[test]
fn array_and_struct_capabilities() {
    let connection = FakeConnection::default();

    let array = connection
        .create_array_of("INTEGER", vec![1_i64.into(), SqlValue::Null])
        .unwrap();
    assert_eq!(array.len(), 2);
    assert!(array.elements[1].is_null());

    let err = connection.create_struct("point", vec![]).unwrap_err();
    assert!(err.is_unsupported_feature());
    assert!(err.is_driver_capability());
    assert!(connection.create_nclob().unwrap_err().is_driver_capability());
}
