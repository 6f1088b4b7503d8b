//! Channels: lookup, membership and moderation.
endpoints! {
	/// Endpoints of the `/channel` resource.
	CHANNEL_ENDPOINTS;

	Anonymous Get "/channel/info" => channel_info / CHANNEL_INFO [("id" | "name")] "ChannelInfo";
	Anonymous Get "/channel/search" => channel_search / CHANNEL_SEARCH ["keyword"] "ChannelSearch";
	Anonymous Get "/channel/stream" => channel_stream / CHANNEL_STREAM [("id" | "name")] "ChannelStream";
	Anonymous Get "/channel/newest" => channel_newest / CHANNEL_NEWEST [] "ChannelNewest";
	Anonymous Get "/channel/members" => channel_members / CHANNEL_MEMBERS [("id" | "name")] "ChannelMembers";

	/// Whether a user is a member of a channel. Both the user and the
	/// channel may be given by id or by name.
	Anonymous Get "/channel/is_member" => channel_is_member / CHANNEL_IS_MEMBER
		[("user_id" | "user_name"), ("channel_id" | "channel_name")] "ChannelIsMember";

	/// Channels suggested to a user.
	Anonymous Get "/channel/suggestion" => channel_suggestion / CHANNEL_SUGGESTION ["user_id"] "ChannelSuggestion";

	Authenticated Post "/channel/create" => channel_create / CHANNEL_CREATE ["name", "desc"] "ChannelCreate";
	Authenticated Post "/channel/remove" => channel_remove / CHANNEL_REMOVE ["id"] "ChannelRemove";
	Authenticated Post "/channel/join" => channel_join / CHANNEL_JOIN ["uidname"] "ChannelJoin";
	Authenticated Post "/channel/leave" => channel_leave / CHANNEL_LEAVE ["uidname"] "ChannelLeave";

	/// Invites users, given by ids or by names, to a channel.
	Authenticated Post "/channel/invite_users" => channel_invite_users / CHANNEL_INVITE_USERS
		["uidname", ("user_ids" | "user_names")] "ChannelInviteUsers";

	Authenticated Get "/channel/scoop" => channel_scoop / CHANNEL_SCOOP [] "ChannelScoop";
	Authenticated Post "/channel/mark_read_new_post" => channel_mark_read_new_post / CHANNEL_MARK_READ_NEW_POST ["ch_id"] "ChannelMarkReadNewPost";
	Authenticated Post "/channel/block" => channel_block / CHANNEL_BLOCK ["uidname"] "ChannelBlock";
	Authenticated Post "/channel/unblock" => channel_unblock / CHANNEL_UNBLOCK ["uidname"] "ChannelUnblock";
}
