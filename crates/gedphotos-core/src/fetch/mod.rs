//! Photo fetcher: single-stream HTTP GET written straight to the target file.
//!
//! The body is streamed in curl-sized chunks (see [`FetchOptions::buffer_size`]),
//! never buffered whole. The target file is only created once the server has
//! answered with a non-error status; a transfer that fails midway leaves the
//! partial file in place.

mod error;

pub use error::FetchError;

use crate::config::GedphotosConfig;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Anything that can copy a URL to a local path.
pub trait PhotoFetcher {
    /// Fetches `url` into `dest`, returning the number of bytes written.
    fn fetch(&self, url: &str, dest: &Path) -> Result<u64, FetchError>;
}

/// Transfer settings for [`CurlFetcher`].
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub buffer_size: usize,
    pub max_redirections: u32,
    pub user_agent: Option<String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        GedphotosConfig::default().into()
    }
}

impl From<GedphotosConfig> for FetchOptions {
    fn from(cfg: GedphotosConfig) -> Self {
        Self {
            buffer_size: cfg.buffer_size,
            max_redirections: cfg.max_redirections,
            user_agent: cfg.user_agent,
        }
    }
}

/// libcurl-backed fetcher. Follows redirects; a final 4xx/5xx is an error.
#[derive(Debug, Clone, Default)]
pub struct CurlFetcher {
    opts: FetchOptions,
}

impl CurlFetcher {
    pub fn new(opts: FetchOptions) -> Self {
        Self { opts }
    }
}

impl PhotoFetcher for CurlFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<u64, FetchError> {
        check_url(url)?;

        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(FetchError::Network)?;
        easy.follow_location(true).map_err(FetchError::Network)?;
        easy.max_redirections(self.opts.max_redirections)
            .map_err(FetchError::Network)?;
        easy.buffer_size(self.opts.buffer_size)
            .map_err(FetchError::Network)?;
        // 4xx/5xx abort before any body byte reaches the write callback.
        easy.fail_on_error(true).map_err(FetchError::Network)?;
        if let Some(ua) = &self.opts.user_agent {
            easy.useragent(ua).map_err(FetchError::Network)?;
        }

        let mut sink = FileSink::new(dest);
        let performed = {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| Ok(sink.write_chunk(data)))
                .map_err(FetchError::Network)?;
            transfer.perform()
        };

        if let Some(source) = sink.error.take() {
            return Err(sink.io_error(source));
        }
        if let Err(e) = performed {
            if e.is_http_returned_error() {
                let status = easy.response_code().unwrap_or(0);
                return Err(FetchError::Http { status });
            }
            return Err(FetchError::Network(e));
        }

        let status = easy.response_code().map_err(FetchError::Network)?;
        if status >= 400 {
            return Err(FetchError::Http { status });
        }
        sink.finish()
    }
}

/// Only absolute http(s) URLs are handed to curl.
fn check_url(raw: &str) -> Result<(), FetchError> {
    match url::Url::parse(raw) {
        Ok(u) if u.scheme() == "http" || u.scheme() == "https" => Ok(()),
        _ => Err(FetchError::InvalidUrl(raw.to_string())),
    }
}

/// Lazily-created output file fed by the curl write callback.
struct FileSink<'a> {
    path: &'a Path,
    file: Option<File>,
    written: u64,
    error: Option<io::Error>,
}

impl<'a> FileSink<'a> {
    fn new(path: &'a Path) -> Self {
        Self {
            path,
            file: None,
            written: 0,
            error: None,
        }
    }

    /// Returns the number of bytes consumed; anything short of `data.len()` aborts the transfer.
    fn write_chunk(&mut self, data: &[u8]) -> usize {
        match self.try_write(data) {
            Ok(()) => {
                self.written += data.len() as u64;
                data.len()
            }
            Err(e) => {
                tracing::debug!(path = %self.path.display(), "photo write failed: {}", e);
                self.error = Some(e);
                0
            }
        }
    }

    fn try_write(&mut self, data: &[u8]) -> io::Result<()> {
        if self.file.is_none() {
            self.file = Some(File::create(self.path)?);
        }
        match self.file.as_mut() {
            Some(f) => f.write_all(data),
            None => Ok(()),
        }
    }

    /// Empty bodies still produce a (zero-length) file.
    fn finish(mut self) -> Result<u64, FetchError> {
        let result = match self.file.take() {
            Some(mut f) => f.flush(),
            None => File::create(self.path).map(|_| ()),
        };
        result.map_err(|e| self.io_error(e))?;
        Ok(self.written)
    }

    fn io_error(&self, source: io::Error) -> FetchError {
        FetchError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}
