use reqwest::Method;

use backoffice_core::{Client, ClientCreate, ClientUpdate, Record};

use super::http::{
    bulk_path, by_admin_path, by_name_path, my_clients_path, rename_path, status_path,
    transfer_path,
};
use crate::cli_args::*;
use crate::modules::auth::RequestOptions;
use crate::modules::shared::{check_name_exists, print_delete, print_view, ResourceController};
use crate::modules::system::http::{expect_response, print_json_response};
use crate::modules::system::CommandContext;

pub(crate) async fn handle_client(
    args: ClientArgs,
    ctx: &mut CommandContext<'_>,
) -> anyhow::Result<()> {
    match args.command {
        ClientCommand::List(args) => {
            let mut controller =
                ResourceController::<Client>::new(&mut ctx.session).with_format(args.format);
            let view = if args.mine {
                controller.load_from(&my_clients_path()).await?
            } else {
                controller.load_collection().await?
            };
            print_view(view)?;
        }
        ClientCommand::Get(args) => {
            let mut controller =
                ResourceController::<Client>::new(&mut ctx.session).with_format(args.format);
            print_view(controller.get_item(args.id).await?)?;
        }
        ClientCommand::Create(args) => {
            let payload = ClientCreate {
                name: args.name,
                email: args.email,
                address: args.address,
                phones: args.phones,
                enabled: !args.disabled,
                admin_id: args.admin_id,
            };
            let mut controller = ResourceController::<Client>::new(&mut ctx.session);
            let outcome = controller.create_item(&payload).await?;
            print_json_response(expect_response(outcome)?).await?;
        }
        ClientCommand::Update(args) => {
            let payload = ClientUpdate {
                name: args.name,
                email: args.email,
                address: args.address,
                phones: args.phones,
                enabled: args.enabled,
                admin_id: args.admin_id,
            };
            if payload.is_empty() {
                anyhow::bail!("nothing to update");
            }
            let mut controller = ResourceController::<Client>::new(&mut ctx.session);
            let outcome = controller.update_item(args.id, &payload).await?;
            print_json_response(expect_response(outcome)?).await?;
        }
        ClientCommand::Delete(args) => {
            let prompt = format!("Delete {} {}?", Client::KIND.singular(), args.id);
            let mut controller = ResourceController::<Client>::new(&mut ctx.session);
            let outcome = controller
                .delete_item(args.id, &prompt, ctx.confirm.as_mut())
                .await?;
            print_delete(outcome, "Client deleted")?;
        }
        ClientCommand::Rename(args) => {
            let mut controller = ResourceController::<Client>::new(&mut ctx.session);
            let view = controller
                .apply_one(
                    &rename_path(args.id, &args.name),
                    RequestOptions::new(Method::PATCH),
                    "Renaming client",
                )
                .await?;
            print_view(view)?;
        }
        ClientCommand::Status(args) => {
            let mut controller = ResourceController::<Client>::new(&mut ctx.session);
            let view = controller
                .apply_one(
                    &status_path(args.id, args.enabled),
                    RequestOptions::new(Method::POST),
                    "Changing client status",
                )
                .await?;
            print_view(view)?;
        }
        ClientCommand::Transfer(args) => {
            let mut controller = ResourceController::<Client>::new(&mut ctx.session);
            let view = controller
                .apply_one(
                    &transfer_path(args.id, args.admin_id),
                    RequestOptions::new(Method::POST),
                    "Transferring client",
                )
                .await?;
            print_view(view)?;
        }
        ClientCommand::Search(args) => {
            let mut controller =
                ResourceController::<Client>::new(&mut ctx.session).with_format(args.format);
            print_view(controller.load_from(&by_name_path(&args.name)).await?)?;
        }
        ClientCommand::ByAdmin(args) => {
            let mut controller =
                ResourceController::<Client>::new(&mut ctx.session).with_format(args.format);
            print_view(controller.load_from(&by_admin_path(args.admin_id)).await?)?;
        }
        ClientCommand::Bulk(args) => {
            let mut controller = ResourceController::<Client>::new(&mut ctx.session);
            let view = controller
                .apply_many(
                    &bulk_path(args.action),
                    RequestOptions::new(Method::POST),
                    &format!("Bulk {}", args.action.as_str()),
                )
                .await?;
            print_view(view)?;
        }
        ClientCommand::Exists(args) => {
            let exists = check_name_exists(&mut ctx.session, Client::KIND, &args.name).await?;
            println!("{exists}");
        }
    }
    Ok(())
}
