use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::{
	fs::{File, create_dir_all, metadata, rename},
	io::{AsyncReadExt, AsyncWriteExt},
};

use medley::{config_adapter, prelude::*};

/// Path of a persisted configuration resource.
///
/// Resource names come from the server's configuration registry, never
/// directly from a request path.
fn config_file_path(base_dir: &Path, name: &str) -> PathBuf {
	PathBuf::from(base_dir).join(format!("{}.json", name))
}

#[derive(Debug)]
pub struct ConfigAdapterFs {
	base_dir: Box<Path>,
}

impl ConfigAdapterFs {
	pub async fn new(base_dir: Box<Path>) -> Result<Self, Error> {
		create_dir_all(&base_dir).await?;
		Ok(Self { base_dir })
	}
}

#[async_trait]
impl config_adapter::ConfigAdapter for ConfigAdapterFs {
	/// Reads a configuration resource; `None` if it was never written
	async fn read_config(&self, name: &str) -> MdResult<Option<Box<[u8]>>> {
		let path = config_file_path(&self.base_dir, name);
		let mut file = match File::open(&path).await {
			Ok(file) => file,
			Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
			Err(err) => return Err(err.into()),
		};

		let mut buf: Vec<u8> = Vec::new();
		file.read_to_end(&mut buf).await?;

		Ok(Some(buf.into_boxed_slice()))
	}

	/// Writes a configuration resource via tmp file + rename so readers
	/// never observe a partial payload
	async fn write_config(&self, name: &str, data: &[u8]) -> MdResult<()> {
		let path = config_file_path(&self.base_dir, name);
		let tmp_path = PathBuf::from(&*self.base_dir).join(format!("tmp-{}.json", name));
		debug!("write_config: {:?}", &path);

		let mut file = File::create(&tmp_path).await?;
		file.write_all(data).await?;
		file.sync_all().await?;
		drop(file);

		rename(&tmp_path, &path).await?;

		Ok(())
	}

	async fn modified_at(&self, name: &str) -> MdResult<Timestamp> {
		let path = config_file_path(&self.base_dir, name);
		let file_metadata = match metadata(&path).await {
			Ok(m) => m,
			Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Err(Error::NotFound),
			Err(err) => return Err(err.into()),
		};

		let modified = file_metadata.modified()?;
		Ok(Timestamp::from_system_time(modified))
	}

	fn config_path(&self, name: &str) -> Box<str> {
		config_file_path(&self.base_dir, name).to_string_lossy().into()
	}
}

// vim: ts=4
