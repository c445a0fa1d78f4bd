//! Command-line surface for `webblog`.

#![deny(clippy::all, clippy::pedantic)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use webblog::config::Overrides;

#[derive(Parser, Debug)]
#[command(name = "webblog", version, about = "WebBlog terminal client", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub overrides: Overrides,

    /// Answer yes to every confirmation prompt
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the screen at a path, e.g. `/` or `/post/3`
    Open { path: String },
    /// Post list, detail and authoring
    Posts(PostsArgs),
    /// Comments on a post
    Comments(CommentsArgs),
    /// Category administration
    Categories(CategoriesArgs),
    /// Show the signed-in user's profile
    Profile,
    /// Show the admin dashboard
    Admin,
    /// Forget the current session and return home
    Logout,
}

#[derive(Parser, Debug)]
pub struct PostsArgs {
    #[command(subcommand)]
    pub action: PostsCmd,
}

#[derive(Subcommand, Debug)]
pub enum PostsCmd {
    /// List all posts
    List,
    /// Show a post with its comments
    Show { id: i64 },
    /// Create a post
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        content_file: Option<PathBuf>,
    },
    /// Edit the title and/or content of a post
    Edit {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        content_file: Option<PathBuf>,
    },
    /// Delete a post from the list
    Delete { id: i64 },
}

#[derive(Parser, Debug)]
pub struct CommentsArgs {
    #[command(subcommand)]
    pub action: CommentsCmd,
}

#[derive(Subcommand, Debug)]
pub enum CommentsCmd {
    /// Add a comment to a post
    Add {
        post_id: i64,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        content_file: Option<PathBuf>,
    },
    /// Delete a comment shown on a post
    Delete { post_id: i64, comment_id: i64 },
}

#[derive(Parser, Debug)]
pub struct CategoriesArgs {
    #[command(subcommand)]
    pub action: CategoriesCmd,
}

#[derive(Subcommand, Debug)]
pub enum CategoriesCmd {
    /// List categories
    List,
    /// Create a category
    Create { name: String },
    /// Rename a category
    Rename { id: i64, name: String },
    /// Delete a category
    Delete { id: i64 },
}
