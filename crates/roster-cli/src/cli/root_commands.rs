use std::path::PathBuf;

use clap::{Args, Subcommand};
use roster_core::enums::SUGGESTED_DEPARTMENTS;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Add an employee. Unset fields take the form defaults.
    Add(AddArgs),
    /// Edit an employee: current values, overlaid with the given fields.
    Update(UpdateArgs),
    /// Delete an employee by id.
    Delete(IdArgs),
    /// List employees in store order.
    List,
    /// Show one employee.
    Show(IdArgs),
    /// Print a JSON Schema, or list schema names.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct AddArgs {
    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(Clone, Debug, Args)]
pub struct UpdateArgs {
    /// Id of the employee to edit.
    pub id: String,

    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(Clone, Debug, Args)]
pub struct IdArgs {
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name (omit to list names).
    pub name: Option<String>,
}

/// Form fields as flags. Values are passed to validation as typed, so
/// `--salary abc` is reported the same way the form would report it.
#[derive(Clone, Debug, Default, Args)]
pub struct FieldArgs {
    /// Read field values from a JSON object file (`-` for stdin). Flags win.
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,

    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long, help = department_help())]
    pub department: Option<String>,
    #[arg(long)]
    pub position: Option<String>,
    #[arg(long)]
    pub salary: Option<String>,
    /// Hire date, e.g. 2024-01-31.
    #[arg(long)]
    pub hire_date: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long)]
    pub zip_code: Option<String>,
    #[arg(long)]
    pub country: Option<String>,
    #[arg(long)]
    pub emergency_contact: Option<String>,
    #[arg(long)]
    pub emergency_phone: Option<String>,
    /// Active, On Leave, or Terminated.
    #[arg(long)]
    pub status: Option<String>,
    /// 1 to 5.
    #[arg(long)]
    pub performance_rating: Option<String>,
    #[arg(long)]
    pub project_assignment: Option<String>,
    /// Free-text notes. Pass an empty string to clear.
    #[arg(long)]
    pub notes: Option<String>,
}

fn department_help() -> String {
    format!("Department (free text, e.g. {})", SUGGESTED_DEPARTMENTS.join(", "))
}
