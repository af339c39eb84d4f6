//! Short-lived file holding a PEM certificate chain.
//!
//! Chains are installed from a file path, so chained material is written
//! out for the duration of one load. The file is created owner-only in
//! the chosen directory, read back by path, then closed and unlinked.
//! Dropping a [`ChainFile`] on any error path also unlinks it.

use log::debug;
use rustls_pki_types::CertificateDer;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::TlsContextError;

pub(crate) struct ChainFile {
    file: NamedTempFile,
}

impl ChainFile {
    /// Write `pem` to a fresh file in `dir`, or the system temporary
    /// directory if `dir` is `None`.
    pub(crate) fn create(dir: Option<&Path>, pem: &[u8]) -> std::io::Result<Self> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(".tls-chain-").suffix(".pem");
        let mut file = match dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.as_file()
                .set_permissions(std::fs::Permissions::from_mode(0o600))?;
        }
        file.write_all(pem)?;
        file.as_file().sync_all()?;
        debug!("Wrote certificate chain to {}", file.path().display());
        Ok(Self { file })
    }

    pub(crate) fn path(&self) -> &Path {
        self.file.path()
    }

    /// Read the chain back from disk and decode it.
    pub(crate) fn load(&self) -> Result<Vec<CertificateDer<'static>>, TlsContextError> {
        let pem = std::fs::read(self.path())?;
        crate::pem::certificates(&pem)
    }

    /// Close and unlink the file, reporting failure to do so.
    pub(crate) fn remove(self) -> std::io::Result<()> {
        let path = self.file.path().to_path_buf();
        self.file.close()?;
        debug!("Removed certificate chain file {}", path.display());
        Ok(())
    }
}
