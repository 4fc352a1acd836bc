// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

mod cli;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use closure_slides::deck::{self, CONST_MODE_LABEL};
use closure_slides::syntax::{HighlightPool, LanguageDetector, highlight};
use closure_slides::viewer::{
    SlideOptions, Theme, render_slide, render_slide_highlighted, slide_file_name,
};
use closure_slides::{Error, Result, logging};

use crate::cli::{CliArgs, Command};

fn main() -> ExitCode {
    logging::init();
    let args = CliArgs::parse();

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::List => list(),
        Command::Show {
            label,
            const_mode,
            flipped,
            theme,
            out,
        } => show(label.as_deref(), SlideOptions { const_mode, flipped }, theme, out),
        Command::Highlight {
            file,
            language,
            plain,
        } => highlight_file(&file, language, plain),
        Command::Render {
            out,
            workers,
            const_mode,
            theme,
        } => render(&out, workers, const_mode, theme),
        Command::ExportTheme => write_stdout(&Theme::default().to_json()),
    }
}

fn load_theme(path: Option<PathBuf>) -> Result<Theme> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "loading theme");
            Theme::load(path)
        }
        None => Ok(Theme::default()),
    }
}

fn write_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{text}").map_err(|source| Error::io("<stdout>", source))
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| Error::io(path, source))
}

fn list() -> Result<()> {
    let mut lines = String::new();
    for (index, entry) in deck::catalog().iter().enumerate() {
        let notes = if entry.notes.is_some() { " [notes]" } else { "" };
        lines.push_str(&format!("{:>2}. {} - {}{notes}\n", index + 1, entry.label, entry.title));
    }
    write_stdout(lines.trim_end())
}

fn show(
    label: Option<&str>,
    options: SlideOptions,
    theme: Option<PathBuf>,
    out: Option<PathBuf>,
) -> Result<()> {
    let entry = match label {
        Some(label) => deck::find(label)?,
        None => deck::default_entry(),
    };
    let theme = load_theme(theme)?;

    info!(label = entry.label, ?options, "rendering slide");
    let page = render_slide(entry, &options, &theme);

    match out {
        Some(path) => write_file(&path, &page),
        None => write_stdout(&page),
    }
}

fn highlight_file(file: &Path, language: Option<closure_slides::Language>, plain: bool) -> Result<()> {
    let text = fs::read_to_string(file).map_err(|source| Error::io(file, source))?;
    let language = language.unwrap_or_else(|| LanguageDetector::new().detect_language(file));
    info!(file = %file.display(), %language, "highlighting file");

    let result = highlight(&text, language);
    if plain {
        write_stdout(&result.plain_text())
    } else {
        write_stdout(&result.marked_up_text)
    }
}

fn render(out: &Path, workers: Option<usize>, const_mode: bool, theme: Option<PathBuf>) -> Result<()> {
    let theme = load_theme(theme)?;
    fs::create_dir_all(out).map_err(|source| Error::io(out, source))?;

    // (file name, entry, options) for every page, highlighted as one batch.
    let mut pages = Vec::new();
    for (index, entry) in deck::catalog().iter().enumerate() {
        pages.push((slide_file_name(index, entry), entry, SlideOptions::default()));
        if const_mode && entry.label == CONST_MODE_LABEL {
            let name = slide_file_name(index, entry).replace(".html", "-const.html");
            let options = SlideOptions {
                const_mode: true,
                ..SlideOptions::default()
            };
            pages.push((name, entry, options));
        }
    }

    let pool = match workers {
        Some(n) => HighlightPool::new(n),
        None => HighlightPool::with_available_parallelism(),
    };
    info!(pages = pages.len(), workers = pool.worker_count(), "pre-rendering deck");

    let docs = pages
        .iter()
        .map(|(_, entry, options)| entry.document(options.const_mode))
        .collect();
    let results = pool.highlight_all(docs)?;

    for ((name, entry, options), highlighted) in pages.iter().zip(&results) {
        let path = out.join(name);
        write_file(&path, &render_slide_highlighted(entry, options, &theme, highlighted))?;
        info!(path = %path.display(), "wrote slide");
    }

    write_stdout(&format!("rendered {} slides into {}", results.len(), out.display()))
}
