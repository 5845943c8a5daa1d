//! Serializer Registry
//!
//! Picks one serializer per value type and remembers the choice for the
//! lifetime of the registry. Resolution order, first match wins:
//!
//! 1. built-in handling for `String` and `Vec<u8>`
//! 2. an explicitly registered serializer for the exact type
//! 3. the first registered factory that accepts the type
//! 4. the default JSON serializer

use crate::serializers::{InbuiltSerializer, JsonSerializer};
use dashmap::DashMap;
use hycache_domain::error::{Error, Result};
use hycache_domain::ports::{CacheSerializer, ErasedSerializer, SerializerFactory, SerializerRequest};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Per-type serializer resolution with memoization
pub struct SerializerRegistry {
    explicit: HashMap<TypeId, ErasedSerializer>,
    factories: Vec<Arc<dyn SerializerFactory>>,
    resolved: DashMap<TypeId, ErasedSerializer>,
}

impl SerializerRegistry {
    /// Start building a registry
    pub fn builder() -> SerializerRegistryBuilder {
        SerializerRegistryBuilder::default()
    }

    /// Number of explicitly registered serializers
    pub fn explicit_count(&self) -> usize {
        self.explicit.len()
    }

    /// Number of registered factories
    pub fn factory_count(&self) -> usize {
        self.factories.len()
    }

    /// Resolve the serializer for `T`
    ///
    /// The first successful resolution for a type is reused by every later
    /// call. A factory that fails, or that hands back a serializer for another
    /// type, is reported as a configuration error.
    pub fn resolve<T>(&self) -> Result<Arc<dyn CacheSerializer<T>>>
    where
        T: Serialize + DeserializeOwned + Send + Sync + 'static,
    {
        let type_id = TypeId::of::<T>();
        if let Some(found) = self.resolved.get(&type_id) {
            return Self::typed(found.value());
        }

        let selected = self.select::<T>()?;
        let erased = self.resolved.entry(type_id).or_insert(selected).clone();
        debug!(
            value_type = std::any::type_name::<T>(),
            serializer = erased.serializer_name(),
            "Resolved cache serializer"
        );
        Self::typed(&erased)
    }

    fn select<T>(&self) -> Result<ErasedSerializer>
    where
        T: Serialize + DeserializeOwned + Send + Sync + 'static,
    {
        let request = SerializerRequest::of::<T>();

        if let Some(inbuilt) = inbuilt_for(&request) {
            return Ok(inbuilt);
        }

        if let Some(explicit) = self.explicit.get(&request.type_id()) {
            return Ok(explicit.clone());
        }

        for factory in &self.factories {
            match factory.try_create(&request) {
                Ok(Some(created)) => {
                    if created.type_id() != request.type_id() {
                        return Err(Error::configuration(format!(
                            "serializer factory '{}' returned a serializer for {} when asked for {}",
                            factory.factory_name(),
                            created.type_name(),
                            request.type_name()
                        )));
                    }
                    return Ok(created);
                }
                Ok(None) => {}
                Err(e) => {
                    return Err(Error::configuration_with_source(
                        format!(
                            "serializer factory '{}' failed for {}",
                            factory.factory_name(),
                            request.type_name()
                        ),
                        e,
                    ));
                }
            }
        }

        Ok(ErasedSerializer::from_serializer::<T, _>(
            JsonSerializer::<T>::new(),
        ))
    }

    fn typed<T: Any>(erased: &ErasedSerializer) -> Result<Arc<dyn CacheSerializer<T>>> {
        erased.downcast::<T>().ok_or_else(|| {
            Error::configuration(format!(
                "serializer '{}' is bound to {} but was requested for {}",
                erased.serializer_name(),
                erased.type_name(),
                std::any::type_name::<T>()
            ))
        })
    }
}

impl Default for SerializerRegistry {
    fn default() -> Self {
        SerializerRegistryBuilder::default().build()
    }
}

impl fmt::Debug for SerializerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerializerRegistry")
            .field("explicit", &self.explicit.len())
            .field("factories", &self.factories)
            .field("resolved", &self.resolved.len())
            .finish()
    }
}

fn inbuilt_for(request: &SerializerRequest) -> Option<ErasedSerializer> {
    if request.is::<String>() {
        Some(ErasedSerializer::from_serializer::<String, _>(
            InbuiltSerializer,
        ))
    } else if request.is::<Vec<u8>>() {
        Some(ErasedSerializer::from_serializer::<Vec<u8>, _>(
            InbuiltSerializer,
        ))
    } else {
        None
    }
}

/// Builder for [`SerializerRegistry`]
#[derive(Default)]
pub struct SerializerRegistryBuilder {
    explicit: HashMap<TypeId, ErasedSerializer>,
    factories: Vec<Arc<dyn SerializerFactory>>,
}

impl SerializerRegistryBuilder {
    /// Register the serializer for `T`, replacing any earlier one
    pub fn with_serializer<T, S>(mut self, serializer: S) -> Self
    where
        T: Any,
        S: CacheSerializer<T> + 'static,
    {
        self.add_serializer::<T>(Arc::new(serializer));
        self
    }

    /// Register a shared serializer for `T`, replacing any earlier one
    pub fn add_serializer<T: Any>(&mut self, serializer: Arc<dyn CacheSerializer<T>>) {
        self.explicit
            .insert(TypeId::of::<T>(), ErasedSerializer::new::<T>(serializer));
    }

    /// Append a factory; factories are consulted in registration order
    pub fn with_factory<F: SerializerFactory + 'static>(mut self, factory: F) -> Self {
        self.add_factory(Arc::new(factory));
        self
    }

    /// Append a shared factory
    pub fn add_factory(&mut self, factory: Arc<dyn SerializerFactory>) {
        self.factories.push(factory);
    }

    /// Build the registry
    pub fn build(self) -> SerializerRegistry {
        SerializerRegistry {
            explicit: self.explicit,
            factories: self.factories,
            resolved: DashMap::new(),
        }
    }
}

impl fmt::Debug for SerializerRegistryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerializerRegistryBuilder")
            .field("explicit", &self.explicit.len())
            .field("factories", &self.factories)
            .finish()
    }
}
