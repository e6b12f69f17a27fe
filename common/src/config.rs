//! This is the `ConfigFile` struct.
//!
//! This is for finding the right default locations for the various configuration files used
//! by `relief`.  This is a configuration file/struct neutral loading engine, storing only the
//! base directory and with `load()` read the proper file or the default one.
//!
//! Every configuration struct implements `Versioned` which carries the expected file version
//! and the default file name, checked at load time.
//!

use std::fmt::Debug;
use std::path::{Path, PathBuf};
use std::{env, fs};

use directories::BaseDirs;
use eyre::{eyre, Result};
use serde::de::DeserializeOwned;
use tracing::{debug, error, trace};

use crate::makepath;

/// Main name for the directory base
const TAG: &str = "relief-utils";

/// All configuration structs loaded through `ConfigFile` implement this.
///
pub trait Versioned {
    /// Expected version for the file.
    const VERSION: usize;
    /// Default file name inside the config directory.
    const FILENAME: &'static str;

    /// Version found in the file.
    fn version(&self) -> usize;
}

/// Generic loader for a configuration file, keeping track of where it came from.
///
#[derive(Debug)]
pub struct ConfigFile<T: Debug + DeserializeOwned + Versioned> {
    /// Tag is the project name.
    tag: String,
    /// This is the base directory for all files.
    basedir: PathBuf,
    inner: Option<T>,
}

impl<T> ConfigFile<T>
where
    T: Debug + DeserializeOwned + Versioned,
{
    #[tracing::instrument]
    fn new(tag: &str) -> Self {
        let base = BaseDirs::new();

        let basedir: PathBuf = match base {
            Some(base) => {
                #[cfg(unix)]
                let base = base.home_dir().join(".config").to_string_lossy().to_string();

                #[cfg(windows)]
                let base = base.data_local_dir().to_string_lossy().to_string();

                debug!("base = {base}");
                let base: PathBuf = makepath!(base, tag);
                base
            }
            None => {
                #[cfg(unix)]
                let homedir = env::var("HOME")
                    .map_err(|_| error!("No HOME variable defined, can not continue"))
                    .unwrap();

                #[cfg(windows)]
                let homedir = env::var("LOCALAPPDATA")
                    .map_err(|_| error!("No LOCALAPPDATA variable defined, can not continue"))
                    .unwrap();

                debug!("base = {homedir}");

                #[cfg(unix)]
                let base: PathBuf = makepath!(homedir, ".config", tag);

                #[cfg(windows)]
                let base: PathBuf = makepath!(homedir, tag);

                base
            }
        };
        ConfigFile {
            tag: String::from(tag),
            basedir,
            inner: None,
        }
    }

    /// Returns the path of the default config directory
    ///
    pub fn config_path() -> PathBuf {
        Self::new(TAG).basedir
    }

    /// Returns the path of the default config file
    ///
    pub fn default_file() -> PathBuf {
        let cfg = Self::config_path().join(T::FILENAME);
        debug!("default = {cfg:?}");
        cfg
    }

    /// Load the file and return a struct T in the right format.
    ///
    /// Use the following search path:
    /// - file specified on CLI
    /// - default basedir (based on $HOME or $LOCALAPPDATA)
    ///
    #[tracing::instrument]
    pub fn load(fname: Option<&Path>) -> Result<ConfigFile<T>> {
        let mut cfg = ConfigFile::<T>::new(TAG);

        let fname = match fname {
            Some(fname) => fname.to_path_buf(),
            None => Self::default_file(),
        };

        // Use a full path
        //
        let fname = if fname.exists() {
            fname.canonicalize()?
        } else {
            return Err(eyre!(
                "Unknown config file {:?} and no default in {:?}",
                fname,
                Self::default_file()
            ));
        };

        trace!("Loading config file {fname:?} from {:?}", cfg.basedir);

        let data = fs::read_to_string(fname)?;
        let data: T = hcl::from_str(&data)?;
        debug!("struct data = {data:?}");

        if data.version() != T::VERSION {
            return Err(eyre!(
                "Bad version in {:?}: found {}, expected {}",
                T::FILENAME,
                data.version(),
                T::VERSION
            ));
        }

        cfg.inner = Some(data);
        Ok(cfg)
    }

    /// Return the inner configuration struct
    ///
    pub fn inner(&self) -> &T {
        self.inner.as_ref().unwrap()
    }

    /// Consume self and return the inner configuration struct
    ///
    pub fn into_inner(self) -> T {
        self.inner.unwrap()
    }

    /// Return the tag used for locating files
    ///
    pub fn tag(&self) -> &str {
        &self.tag
    }
}
