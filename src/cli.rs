use clap::{Parser, Subcommand};

const HELM_VERSION_EXAMPLE: &str = "\
Example:
  kustedit set helmversion my-chart=1.2.3 my-other-chart=4.5.6

edits the version of the matching helm charts in the kustomization file:

  helmCharts:
  - name: my-chart
    version: 1.2.3
    repo: oci://myrepo
  - name: my-other-chart
    version: 4.5.6
    repo: oci://myrepo";

/// Edit kustomization files from the command line
#[derive(Parser, Debug)]
#[command(name = "kustedit")]
#[command(version)]
#[command(about = "Edit kustomization files from the command line", long_about = None)]
pub struct Args {
    /// Directory containing the kustomization file (defaults to current directory)
    #[arg(short, long, global = true)]
    pub path: Option<String>,

    /// Kustomization file to edit, overriding lookup in the directory
    #[arg(short = 'f', long = "file", global = true, value_name = "FILE")]
    pub file: Option<String>,

    /// Path to config file (defaults to kustedit.config.yml in the directory)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Set a value in the kustomization file
    Set {
        #[command(subcommand)]
        target: SetCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum SetCommand {
    /// Sets helm chart versions in the kustomization file
    #[command(name = "helmversion", after_help = HELM_VERSION_EXAMPLE)]
    HelmVersion {
        /// Chart versions, each as chartName=version
        #[arg(value_name = "CHART=VERSION")]
        chart_versions: Vec<String>,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
