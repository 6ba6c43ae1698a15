//! Partner business commands.

use anyhow::Result;
use tipdesk_business::ApiClient;
use tipdesk_business::entities::Business;
use tipdesk_business::forms::CreateBusinessForm;
use tracing::instrument;

use super::report;
use crate::cli::{CreatePartnerArgs, PartnerCommand};
use crate::output::Output;
use crate::session::Context;

impl From<CreatePartnerArgs> for CreateBusinessForm {
    fn from(args: CreatePartnerArgs) -> Self {
        Self {
            user_id: args.user_id,
            legal_name: args.legal_name,
            brand_name: args.brand_name,
            business_type: args.business_type,
            entity_type: args.entity_type,
            pan_number: args.pan_number,
            gst_number: args.gst_number.unwrap_or_default(),
            address: args.address.unwrap_or_default(),
            city: args.city.unwrap_or_default(),
            state: args.state.unwrap_or_default(),
            pincode: args.pincode.unwrap_or_default(),
        }
    }
}

/// Validates locally, then creates the business.
pub async fn create(client: &ApiClient, args: CreatePartnerArgs) -> Result<Business> {
    let request = CreateBusinessForm::from(args).validate()?;
    Ok(client.create_business(&request).await?)
}

#[instrument(skip_all, name = "partner")]
pub async fn run_partner(ctx: &Context, action: PartnerCommand) -> Result<()> {
    let out = Output::new();
    let client = ctx.authed()?;
    match action {
        PartnerCommand::Verify { id } => {
            let message = client.set_business_verified(&id, true).await?;
            report(&out, &message, "Business marked as verified");
        }
        PartnerCommand::Unverify { id } => {
            let message = client.set_business_verified(&id, false).await?;
            report(&out, &message, "Business marked as unverified");
        }
        PartnerCommand::Create(args) => {
            let business = create(&client, args).await?;
            out.success(format!(
                "Created partner {} ({})",
                business.legal_name, business.id
            ));
        }
    }
    Ok(())
}
