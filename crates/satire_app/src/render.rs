use chrono::{DateTime, Local};
use satire_core::AppViewModel;

pub fn print_help() {
    println!("commands:");
    println!("  new <prompt>   submit a prompt (at least 10 characters)");
    println!("  up <id>        upvote an article (id prefix is enough)");
    println!("  down <id>      downvote an article (id prefix is enough)");
    println!("  refresh        fetch the list now");
    println!("  status         show the current list");
    println!("  quit           leave");
}

pub fn render(view: &AppViewModel, last_refresh: Option<DateTime<Local>>) {
    println!();
    println!("-- {} --", view.connection);
    if let Some(error) = &view.last_error {
        println!("!! {error}");
    }
    if view.create_in_flight {
        println!(".. generating article, hang tight");
    }
    if !view.can_vote {
        println!("   (voting disabled until the service is reachable)");
    }
    if view.prompt_len > 0 {
        println!("   draft prompt: {} chars", view.prompt_len);
    }

    if view.articles.is_empty() {
        println!("no articles yet; `new <prompt>` to submit one");
    } else {
        for (rank, row) in view.articles.iter().enumerate() {
            let id_prefix: String = row.id.chars().take(8).collect();
            let pending = if row.vote_pending { "  (vote pending)" } else { "" };
            println!(
                "{:>2}. [{:+}] +{} -{}  {}  {}{}",
                rank + 1,
                row.score,
                row.upvotes,
                row.downvotes,
                id_prefix,
                row.headline,
                pending
            );
            if !row.preview.is_empty() {
                println!("      {}", row.preview);
            }
        }
    }

    match last_refresh {
        Some(at) => println!(
            "{} articles, updated {}",
            view.article_count,
            at.format("%H:%M:%S")
        ),
        None => println!("{} articles", view.article_count),
    }
}
