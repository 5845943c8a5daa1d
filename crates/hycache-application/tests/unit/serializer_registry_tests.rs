//! Tests for serializer resolution order

use crate::test_utils::{Customer, Order};
use hycache_application::HybridCache;
use hycache_application::SerializerRegistry;
use hycache_domain::error::{Error, Result};
use hycache_domain::ports::{
    CacheSerializer, ErasedSerializer, SerializerFactory, SerializerRequest,
};
use hycache_providers::cache::MokaLocalCache;
use std::sync::Arc;

/// Serializer writing the customer id as decimal text
struct CustomerIdSerializer(&'static str);

impl CacheSerializer<Customer> for CustomerIdSerializer {
    fn serialize(&self, value: &Customer) -> Result<Vec<u8>> {
        Ok(value.id.to_string().into_bytes())
    }

    fn deserialize(&self, payload: &[u8]) -> Result<Customer> {
        let text = String::from_utf8(payload.to_vec())?;
        let id = text
            .parse()
            .map_err(|e| Error::serialization_with_source("bad customer id", e))?;
        Ok(Customer {
            id,
            name: String::new(),
        })
    }

    fn serializer_name(&self) -> &str {
        self.0
    }
}

/// Serializer claiming to handle strings
struct ShoutingSerializer;

impl CacheSerializer<String> for ShoutingSerializer {
    fn serialize(&self, value: &String) -> Result<Vec<u8>> {
        Ok(value.to_uppercase().into_bytes())
    }

    fn deserialize(&self, payload: &[u8]) -> Result<String> {
        Ok(String::from_utf8(payload.to_vec())?)
    }

    fn serializer_name(&self) -> &str {
        "shouting"
    }
}

/// Factory that only answers for `Customer`
#[derive(Debug)]
struct CustomerFactory(&'static str);

impl SerializerFactory for CustomerFactory {
    fn try_create(&self, request: &SerializerRequest) -> Result<Option<ErasedSerializer>> {
        if request.is::<Customer>() {
            Ok(Some(ErasedSerializer::from_serializer::<Customer, _>(
                CustomerIdSerializer(self.0),
            )))
        } else {
            Ok(None)
        }
    }

    fn factory_name(&self) -> &str {
        self.0
    }
}

/// Factory that always fails
#[derive(Debug)]
struct BrokenFactory;

impl SerializerFactory for BrokenFactory {
    fn try_create(&self, _request: &SerializerRequest) -> Result<Option<ErasedSerializer>> {
        Err(Error::internal("factory exploded"))
    }

    fn factory_name(&self) -> &str {
        "broken"
    }
}

/// Factory answering every request with a `Customer` serializer
#[derive(Debug)]
struct MismatchedFactory;

impl SerializerFactory for MismatchedFactory {
    fn try_create(&self, _request: &SerializerRequest) -> Result<Option<ErasedSerializer>> {
        Ok(Some(ErasedSerializer::from_serializer::<Customer, _>(
            CustomerIdSerializer("mismatched"),
        )))
    }

    fn factory_name(&self) -> &str {
        "mismatched"
    }
}

fn serializer_name<T>(registry: &SerializerRegistry) -> String
where
    T: serde::Serialize + serde::de::DeserializeOwned + Send + Sync + 'static,
{
    registry
        .resolve::<T>()
        .expect("resolve")
        .serializer_name()
        .to_string()
}

#[test]
fn test_inbuilt_types_use_inbuilt_serializer() {
    let registry = SerializerRegistry::default();
    assert_eq!(serializer_name::<String>(&registry), "inbuilt");
    assert_eq!(serializer_name::<Vec<u8>>(&registry), "inbuilt");
}

#[test]
fn test_other_types_fall_back_to_json() {
    let registry = SerializerRegistry::default();
    assert_eq!(serializer_name::<Customer>(&registry), "json");
    assert_eq!(serializer_name::<Order>(&registry), "json");
    assert_eq!(serializer_name::<Vec<String>>(&registry), "json");
}

#[test]
fn test_explicit_serializer_beats_factory() {
    let registry = SerializerRegistry::builder()
        .with_factory(CustomerFactory("from-factory"))
        .with_serializer::<Customer, _>(CustomerIdSerializer("explicit"))
        .build();

    assert_eq!(serializer_name::<Customer>(&registry), "explicit");
    assert_eq!(serializer_name::<Order>(&registry), "json");
}

#[test]
fn test_first_matching_factory_wins() {
    let registry = SerializerRegistry::builder()
        .with_factory(CustomerFactory("first"))
        .with_factory(CustomerFactory("second"))
        .build();

    assert_eq!(registry.factory_count(), 2);
    assert_eq!(serializer_name::<Customer>(&registry), "first");
}

#[test]
fn test_declining_factory_falls_through_to_json() {
    let registry = SerializerRegistry::builder()
        .with_factory(CustomerFactory("customers-only"))
        .build();

    assert_eq!(serializer_name::<Order>(&registry), "json");
}

#[test]
fn test_explicit_serializer_for_inbuilt_type_is_ignored() {
    let registry = SerializerRegistry::builder()
        .with_serializer::<String, _>(ShoutingSerializer)
        .build();

    assert_eq!(registry.explicit_count(), 1);
    assert_eq!(serializer_name::<String>(&registry), "inbuilt");
}

#[test]
fn test_failing_factory_is_configuration_error() {
    let registry = SerializerRegistry::builder()
        .with_factory(BrokenFactory)
        .build();

    let err = registry.resolve::<Order>().err().expect("resolution fails");
    assert!(err.is_configuration());
}

#[test]
fn test_factory_returning_wrong_type_is_configuration_error() {
    let registry = SerializerRegistry::builder()
        .with_factory(MismatchedFactory)
        .build();

    let err = registry.resolve::<Order>().err().expect("resolution fails");
    assert!(err.is_configuration());
    assert!(err.to_string().contains("mismatched"));

    // Matching type is accepted from the same factory
    assert_eq!(serializer_name::<Customer>(&registry), "mismatched");
}

#[test]
fn test_resolution_is_memoized() {
    let registry = SerializerRegistry::builder()
        .with_factory(CustomerFactory("factory"))
        .build();

    let first = registry.resolve::<Customer>().expect("resolve");
    let second = registry.resolve::<Customer>().expect("resolve");
    assert!(Arc::ptr_eq(&first, &second));
}

#[tokio::test]
async fn test_cache_exposes_resolved_serializer() {
    let cache = HybridCache::builder()
        .with_local_cache(Arc::new(MokaLocalCache::new()))
        .with_serializer::<Customer, _>(CustomerIdSerializer("explicit"))
        .build()
        .expect("cache");

    let serializer = cache.get_serializer::<Customer>().expect("serializer");
    assert_eq!(serializer.serializer_name(), "explicit");

    let payload = serializer
        .serialize(&Customer {
            id: 42,
            name: "ignored".to_string(),
        })
        .expect("serialize");
    assert_eq!(payload, b"42");
    assert_eq!(cache.get_serializer::<String>().expect("inbuilt").serializer_name(), "inbuilt");
}
