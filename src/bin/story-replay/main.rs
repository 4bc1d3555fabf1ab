//! CLI tool to replay an editor action script into a story draft.
//!
//! Usage:
//!   story-replay --input actions.json [--output draft.json] [--allow-replies false] [--stats]
//!
//! The input is a JSON array of actions, e.g.
//! `[{"action": "add_text", "text": "Hi"}, {"action": "undo"}]`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use storyedit::{EditorAction, StoryEditorStore};

#[derive(Parser, Debug)]
#[command(
    name = "story-replay",
    about = "Replay story editor actions and write the resulting draft",
    version
)]
struct Args {
    /// Input JSON file path (array of editor actions)
    #[arg(short, long)]
    input: PathBuf,

    /// Output file path (defaults to input path with .draft.json extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Whether the published story accepts replies
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    allow_replies: bool,

    /// Print statistics about the replay
    #[arg(long, default_value = "false")]
    stats: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    // 1. Validate input exists
    let input_path = &args.input;
    if !input_path.exists() {
        anyhow::bail!("Input file does not exist: {}", input_path.display());
    }

    // 2. Read and parse the action script
    let json_content =
        std::fs::read_to_string(input_path).context("Failed to read input file")?;
    let actions =
        EditorAction::parse_script(&json_content).context("Failed to parse action script")?;
    let num_actions = actions.len();
    info!("replaying {} action(s) from {}", num_actions, input_path.display());

    // 3. Replay
    let mut store = StoryEditorStore::new();
    let created = store.apply_all(actions);

    // 4. Build and serialize the draft
    let draft = store.to_draft().with_allow_replies(args.allow_replies);
    let output_json = draft
        .to_json_pretty()
        .context("Failed to serialize draft")?;

    // 5. Determine output path
    let output_path = args.output.unwrap_or_else(|| {
        let mut path = input_path.clone();
        path.set_extension("draft.json");
        path
    });

    // 6. Write output
    std::fs::write(&output_path, &output_json).context("Failed to write output file")?;

    // 7. Optional stats
    if args.stats {
        let counts = draft.element_counts();
        let state = store.state();
        println!();
        println!("Replay statistics:");
        println!("  Actions applied: {}", num_actions);
        println!("  Ids created:     {}", created.len());
        println!();
        println!("  Text elements:   {}", counts.text);
        println!("  Stickers:        {}", counts.sticker);
        println!("  Drawing paths:   {}", counts.drawing);
        println!();
        println!(
            "  History:         {} snapshot(s), cursor {}",
            store.history_len(),
            store
                .history_index()
                .map_or_else(|| "-".to_string(), |i| i.to_string())
        );
        println!("  Background:      {} ({})", state.background_color, state.background_filter);
        println!("  Duration:        {}s, {}", draft.duration, draft.privacy);
    }

    println!();
    println!(
        "Successfully replayed {} → {}",
        input_path.display(),
        output_path.display()
    );

    Ok(())
}
