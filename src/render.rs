//! Hand-off to external document renderers
//!
//! The key abstraction is the `DocumentRenderer` trait, which receives one
//! complete document and produces image files. Implementations:
//! - `ProcessRenderer`: runs pdflatex + pdftoppm, or `typst compile`
//! - `RecordingRenderer`: keeps documents in memory (testing, dry runs)

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;
use tracing::{debug, info, warn};

use crate::config::{Backend, RenderOptions};
use crate::utils::error::{TableError, TableResult};

/// Base name of the document inside the working directory
const DOC_STEM: &str = "table";
/// Prefix of page images produced by the renderer
const PAGE_PREFIX: &str = "page";
/// Lines of renderer output kept in error messages
const LOG_TAIL_LINES: usize = 20;

/// Trait for turning a finished document into image files
pub trait DocumentRenderer {
    /// Render `document` to `output`
    ///
    /// Returns the written image paths: `output` itself for a single page,
    /// `<stem>-<n>.<ext>` siblings when the renderer paginates.
    fn render(&self, document: &str, output: &Path) -> TableResult<Vec<PathBuf>>;
}

/// Renderer backed by external programs
#[derive(Debug, Clone)]
pub struct ProcessRenderer {
    backend: Backend,
    dpi: u32,
    keep_intermediates: bool,
    work_root: PathBuf,
}

/// Images written by one render, plus the working directory if it was kept
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImages {
    pub images: Vec<PathBuf>,
    pub kept_dir: Option<PathBuf>,
}

/// One external program run inside the working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderStep {
    pub program: &'static str,
    pub args: Vec<String>,
}

impl RenderStep {
    fn new(program: &'static str, args: &[&str]) -> Self {
        Self {
            program,
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Programs run for `backend`, in order
///
/// `longtable` only settles its column widths from the `.aux` file written
/// by a previous run, so LaTeX is compiled twice before rasterizing.
pub fn render_steps(backend: Backend, dpi: u32) -> Vec<RenderStep> {
    let dpi = dpi.to_string();
    let doc_name = format!("{}.{}", DOC_STEM, backend.extension());
    match backend {
        Backend::Latex => {
            let pdflatex = RenderStep::new(
                "pdflatex",
                &["-interaction=nonstopmode", "-halt-on-error", &doc_name],
            );
            let pdf_name = format!("{}.pdf", DOC_STEM);
            vec![
                pdflatex.clone(),
                pdflatex,
                RenderStep::new("pdftoppm", &["-png", "-r", &dpi, &pdf_name, PAGE_PREFIX]),
            ]
        }
        Backend::Typst => {
            let pattern = format!("{}-{{0p}}.png", PAGE_PREFIX);
            vec![RenderStep::new(
                "typst",
                &["compile", "--format", "png", "--ppi", &dpi, &doc_name, &pattern],
            )]
        }
    }
}

impl ProcessRenderer {
    pub fn new(options: &RenderOptions) -> Self {
        Self {
            backend: options.backend,
            dpi: options.dpi,
            keep_intermediates: options.keep_intermediates,
            work_root: std::env::temp_dir(),
        }
    }

    /// Create working directories under `root` instead of the system temp dir
    pub fn with_work_root(mut self, root: impl AsRef<Path>) -> Self {
        self.work_root = root.as_ref().to_path_buf();
        self
    }

    /// Render `document` and report the kept working directory, if any
    pub fn render_job(&self, document: &str, output: &Path) -> TableResult<RenderedImages> {
        let dir = self.job_dir()?;
        info!(backend = ?self.backend, dir = %dir.path().display(), "rendering document");

        let result = self.render_in(dir.path(), document, output);
        let kept_dir = self.finish_job(dir);

        match result {
            Ok(images) => {
                info!(images = images.len(), "render finished");
                Ok(RenderedImages { images, kept_dir })
            }
            Err(e) => {
                if let Some(dir) = &kept_dir {
                    warn!(dir = %dir.display(), "render failed, intermediate files kept");
                }
                Err(e)
            }
        }
    }

    fn job_dir(&self) -> TableResult<TempDir> {
        fs::create_dir_all(&self.work_root)
            .map_err(|e| TableError::io(format!("creating {}", self.work_root.display()), e))?;
        tempfile::Builder::new()
            .prefix("tabspan-")
            .tempdir_in(&self.work_root)
            .map_err(|e| {
                TableError::io(
                    format!("creating a working directory in {}", self.work_root.display()),
                    e,
                )
            })
    }

    /// Keep or remove the working directory
    fn finish_job(&self, dir: TempDir) -> Option<PathBuf> {
        if self.keep_intermediates {
            return Some(dir.keep());
        }
        let path = dir.path().to_path_buf();
        if let Err(e) = dir.close() {
            debug!(dir = %path.display(), error = %e, "could not remove working directory");
        }
        None
    }

    fn render_in(&self, dir: &Path, document: &str, output: &Path) -> TableResult<Vec<PathBuf>> {
        let doc_path = dir.join(format!("{}.{}", DOC_STEM, self.backend.extension()));
        fs::write(&doc_path, document)
            .map_err(|e| TableError::io(format!("writing {}", doc_path.display()), e))?;

        for step in render_steps(self.backend, self.dpi) {
            run_program(step.program, &step.args, dir)?;
        }

        let pages = collect_pages(dir)?;
        place_outputs(&pages, output)
    }
}

impl DocumentRenderer for ProcessRenderer {
    fn render(&self, document: &str, output: &Path) -> TableResult<Vec<PathBuf>> {
        self.render_job(document, output).map(|job| job.images)
    }
}

/// In-memory renderer that records every document it receives
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    documents: RefCell<Vec<String>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Documents received so far, in order
    pub fn documents(&self) -> Vec<String> {
        self.documents.borrow().clone()
    }
}

impl DocumentRenderer for RecordingRenderer {
    fn render(&self, document: &str, output: &Path) -> TableResult<Vec<PathBuf>> {
        self.documents.borrow_mut().push(document.to_string());
        Ok(vec![output.to_path_buf()])
    }
}

fn run_program(program: &str, args: &[String], dir: &Path) -> TableResult<()> {
    debug!(program, ?args, "running renderer");

    let out = Command::new(program)
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TableError::RendererNotFound {
                    program: program.to_string(),
                }
            } else {
                TableError::io(format!("running {}", program), e)
            }
        })?;

    if out.status.success() {
        return Ok(());
    }

    // pdflatex reports on stdout, the others on stderr
    let mut log = String::from_utf8_lossy(&out.stdout).into_owned();
    log.push_str(&String::from_utf8_lossy(&out.stderr));
    Err(TableError::Render {
        program: program.to_string(),
        status: out.status.to_string(),
        stderr: tail_lines(&log, LOG_TAIL_LINES),
    })
}

fn tail_lines(text: &str, count: usize) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let start = lines.len().saturating_sub(count);
    lines[start..].join("\n")
}

/// Page images in `dir`, in page order
fn collect_pages(dir: &Path) -> TableResult<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).map_err(|e| TableError::io(format!("listing {}", dir.display()), e))?;

    let mut pages: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_page_image(path))
        .collect();
    // Page numbers are zero-padded by both renderers
    pages.sort();

    if pages.is_empty() {
        return Err(TableError::NoImageProduced {
            dir: dir.to_path_buf(),
        });
    }
    Ok(pages)
}

fn is_page_image(path: &Path) -> bool {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    name.starts_with(PAGE_PREFIX) && name.ends_with(".png")
}

/// Copy rendered pages next to `output`
fn place_outputs(pages: &[PathBuf], output: &Path) -> TableResult<Vec<PathBuf>> {
    let targets = output_paths(output, pages.len());
    for (page, target) in pages.iter().zip(&targets) {
        fs::copy(page, target)
            .map_err(|e| TableError::io(format!("writing {}", target.display()), e))?;
    }
    Ok(targets)
}

/// Target paths for `count` pages
pub fn output_paths(output: &Path, count: usize) -> Vec<PathBuf> {
    if count <= 1 {
        return vec![output.to_path_buf()];
    }

    let stem = output
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("table");
    let ext = output.extension().and_then(|e| e.to_str()).unwrap_or("png");
    (1..=count)
        .map(|n| output.with_file_name(format!("{}-{}.{}", stem, n, ext)))
        .collect()
}
