use std::marker::PhantomData;

use bevy::asset::io::Reader;
use bevy::asset::{AssetLoader, LoadContext};
use bevy::prelude::*;
use bevy::reflect::TypePath;
use serde::Deserialize;
use thiserror::Error;

use crate::stage::layer::{LayerParseError, TileLayer};

use super::assets::TileLayerAsset;

#[derive(Debug, Error)]
pub enum RonLoaderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Generic loader for any RON-encoded asset type, dispatched by file
/// extension.
#[derive(TypePath)]
pub struct RonLoader<T: TypePath> {
    extensions: Vec<&'static str>,
    _phantom: PhantomData<T>,
}

impl<T: TypePath> RonLoader<T> {
    pub fn new(extensions: &[&'static str]) -> Self {
        Self {
            extensions: extensions.to_vec(),
            _phantom: PhantomData,
        }
    }
}

impl<T> AssetLoader for RonLoader<T>
where
    T: Asset + TypePath + for<'de> Deserialize<'de> + Send + Sync + 'static,
{
    type Asset = T;
    type Settings = ();
    type Error = RonLoaderError;

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        _load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;
        let asset = ron::de::from_bytes::<T>(&bytes)?;
        Ok(asset)
    }

    fn extensions(&self) -> &[&str] {
        &self.extensions
    }
}

#[derive(Debug, Error)]
pub enum CsvLoaderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("CSV parse error: {0}")]
    Parse(#[from] LayerParseError),
}

/// Loader for map layer CSV files.
#[derive(Default, TypePath)]
pub struct CsvLayerLoader;

impl AssetLoader for CsvLayerLoader {
    type Asset = TileLayerAsset;
    type Settings = ();
    type Error = CsvLoaderError;

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        _load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;
        let text = std::str::from_utf8(&bytes)?;
        let layer = TileLayer::parse(text)?;
        Ok(TileLayerAsset { layer })
    }

    fn extensions(&self) -> &[&str] {
        &["csv"]
    }
}
