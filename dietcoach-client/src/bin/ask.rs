use std::{env, error::Error, fs::File, io::BufReader};

use dietcoach_client::AdviceClient;
use dietcoach_model::{
    advice::{AdviceRequest, AdviceResponse},
    text::format_health_response,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let path = env::args().nth(1).unwrap_or_else(|| "request.json".to_owned());
    let url = env::var("DIETCOACH_URL")
        .unwrap_or_else(|_| "http://localhost:8080/api/generate-plan".to_owned());

    let file = File::open(path)?;
    let request: AdviceRequest = serde_json::from_reader(BufReader::new(file))?;
    let client = dietcoach_client::create(url);

    if request.is_chat() {
        match client.ask(&request).await? {
            AdviceResponse::Response(text) => println!("{}", format_health_response(&text)),
            AdviceResponse::Error(message) => return Err(message.into()),
        }
    } else {
        let plan = client.request_plan(&request).await?;
        println!("{}", serde_json::to_string_pretty(&plan)?);
    }

    Ok(())
}
