//! Search pipeline: list organizations, select one, filter its networks,
//! write the matches.

use std::io::{IsTerminal, Write};
use std::path::PathBuf;

use log::debug;

use super::Cli;
use super::select::{
    FixedSelector, LineSelector, OrgSelector, PromptSelector, SelectorKind, choose_selector,
    format_listing,
};
use crate::client::{DashboardApi, MerakiClient, Network, Organization};
use crate::config::{Config, FileConfig};
use crate::error::{Result, SelectionError};
use crate::output::write_networks;
use crate::search::{MatchResult, filter_networks};

/// What a completed search produced
#[derive(Debug)]
pub struct SearchSummary {
    pub organization: Organization,
    pub matches: MatchResult,
    pub output: PathBuf,
}

/// Run the search command
pub async fn run(cli: &Cli) -> Result<()> {
    let file = FileConfig::load_at(cli.config.as_deref())?;
    let config = Config::resolve(cli.overrides(), file)?;
    let client = MerakiClient::from_config(&config)?;

    let mut selector = selector_for(cli.org_index);
    let mut stdout = std::io::stdout();

    let summary = search_networks(&client, &config, selector.as_mut(), &mut stdout).await?;
    debug!(
        "Search of {} matched {} networks, written to {}",
        summary.organization.name,
        summary.matches.len(),
        summary.output.display()
    );
    Ok(())
}

/// Pick how the organization index is obtained.
fn selector_for(org_index: Option<usize>) -> Box<dyn OrgSelector> {
    let stdin = std::io::stdin();
    match choose_selector(org_index, stdin.is_terminal(), std::io::stderr().is_terminal()) {
        SelectorKind::Fixed(index) => Box::new(FixedSelector(index)),
        SelectorKind::Prompt => Box::new(PromptSelector),
        SelectorKind::Line => Box::new(LineSelector::new(stdin.lock())),
    }
}

/// Execute the four pipeline stages once, writing progress to `out`.
pub async fn search_networks<A, W>(
    api: &A,
    config: &Config,
    selector: &mut dyn OrgSelector,
    out: &mut W,
) -> Result<SearchSummary>
where
    A: DashboardApi + ?Sized,
    W: Write,
{
    let orgs = api.list_orgs().await?;
    debug!("Fetched {} organizations", orgs.len());
    if orgs.is_empty() {
        return Err(SelectionError::NoOrganizations.into());
    }

    writeln!(out, "{}", format_listing(&orgs))?;
    writeln!(out)?;
    out.flush()?;

    let index = selector.select(&orgs, out)?;
    let organization = orgs
        .get(index)
        .cloned()
        .ok_or(SelectionError::OutOfRange {
            index,
            count: orgs.len(),
        })?;
    writeln!(out, "Searching the {} organization", organization.name)?;

    let networks: Vec<Network> = api.list_networks(&organization.id).await?;
    debug!(
        "Fetched {} networks for organization {}",
        networks.len(),
        organization.id
    );

    let matches = filter_networks(networks, &config.search);
    writeln!(
        out,
        "Found {} entries with the string {}",
        matches.len(),
        config.search.term()
    )?;

    write_networks(&config.output, &matches)?;
    writeln!(
        out,
        "The networks found have been written to the file {}",
        config.output.display()
    )?;

    Ok(SearchSummary {
        organization,
        matches,
        output: config.output.clone(),
    })
}
