use palisade_dns_domain::{Config, DnsRequest, DomainError, Question, RecordType};
use palisade_dns_infrastructure::dns::resolver::{ChainBuilder, SafeSearchResolver};
use std::net::IpAddr;
use std::str::FromStr;
use std::sync::Arc;

/// Resolve one question against the policy chain and print the outcome.
/// This node carries no upstream resolver, so anything the policy stages
/// do not answer is reported as "would be delegated downstream".
pub async fn run(
    config: &Config,
    name: &str,
    record_type: &str,
    client_id: Option<String>,
    client_ip: Option<IpAddr>,
) -> anyhow::Result<()> {
    let record_type = RecordType::from_str(record_type)?;

    let chain = match ChainBuilder::new()
        .with_stage(Arc::new(SafeSearchResolver::new(
            config.safe_search.clone(),
        )?))
        .build()
    {
        Ok(chain) => chain,
        Err(DomainError::EmptyChain) => {
            println!("no policy stage is enabled; {name} {record_type} would be delegated downstream");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let mut request = DnsRequest::new(Question::new(name, record_type));
    request.client_id = client_id.map(Into::into);
    request.client_addr = client_ip;

    match chain.resolve(&request).await {
        Ok(response) => {
            println!(
                "{name} {record_type} => {} ({})",
                response.response_type, response.reason
            );
            for record in response.answers() {
                println!("  {record}");
            }
        }
        Err(DomainError::NoNextResolver(stage)) => {
            println!(
                "{name} {record_type} => not handled by '{stage}'; would be delegated downstream"
            );
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
